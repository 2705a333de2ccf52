use std::fmt;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::http::{Body, HttpClient, HttpResponse, Url, UrlParseError};
use crate::quality::ColorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TargetKind {
    Light,
    Group,
}

/// The light or group whose colour a run sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LightTarget {
    #[serde(rename = "type")]
    pub kind: TargetKind,

    #[serde(deserialize_with = "crate::id::deserialize_id")]
    pub id: String,
}

impl LightTarget {
    pub fn light(id: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Light,
            id: id.into(),
        }
    }

    pub fn group(id: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Group,
            id: id.into(),
        }
    }

    fn state_segments(&self) -> [&str; 3] {
        match self.kind {
            TargetKind::Light => ["lights", self.id.as_str(), "state"],
            TargetKind::Group => ["groups", self.id.as_str(), "action"],
        }
    }
}

impl fmt::Display for LightTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TargetKind::Light => write!(f, "light {}", self.id),
            TargetKind::Group => write!(f, "group {}", self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeResponse {
    pub status: u16,

    pub body: Body,
}

impl From<HttpResponse> for BridgeResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status: response.status,
            body: Body::parse(&response.body),
        }
    }
}

/// Client for the bridge's REST API under `/api/<user>`.
#[derive(Debug)]
pub struct HueClient<C> {
    http: C,
    bridge: Url,
    user: String,
}

impl<C: HttpClient> HueClient<C> {
    pub fn new(http: C, bridge: &str, user: &str) -> std::result::Result<Self, UrlParseError> {
        let bridge = Url::parse(&format!("http://{bridge}/"))?;

        Ok(Self {
            http,
            bridge,
            user: user.to_owned(),
        })
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub async fn get_groups(&self) -> Result<BridgeResponse> {
        self.get(&["groups"]).await
    }

    pub async fn get_group(&self, group_id: &str) -> Result<BridgeResponse> {
        self.get(&["groups", group_id]).await
    }

    pub async fn set_group_state(&self, group_id: &str, hue: ColorCode) -> Result<BridgeResponse> {
        self.set_state(&LightTarget::group(group_id), hue).await
    }

    pub async fn set_light_state(&self, light_id: &str, hue: ColorCode) -> Result<BridgeResponse> {
        self.set_state(&LightTarget::light(light_id), hue).await
    }

    /// Sends `{"hue": ..}` to the target. Anything short of a 2xx answer is
    /// `ControlUpdateFailed`.
    pub async fn set_state(&self, target: &LightTarget, hue: ColorCode) -> Result<BridgeResponse> {
        let url = self.endpoint(&target.state_segments());
        let body = json!({ "hue": hue });

        let response = match self.http.put(url.as_str(), &body).await {
            Ok(response) => response,
            Err(source) => {
                return Err(Error::ControlUpdateFailed {
                    target: target.clone(),
                    status: None,
                    body: None,
                    source: Some(source),
                });
            }
        };

        if !response.is_success() {
            return Err(Error::ControlUpdateFailed {
                target: target.clone(),
                status: Some(response.status),
                body: Some(Body::parse(&response.body)),
                source: None,
            });
        }

        let response = BridgeResponse::from(response);

        info!(%target, %hue, status = response.status, "bridge accepted state update");
        debug!(body = %response.body, "bridge response");

        Ok(response)
    }

    /// `/api/<user>/<segments..>`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.bridge.clone();
        // http URLs always have a path to extend.
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().push("api").push(&self.user).extend(segments);
        }
        url
    }

    async fn get(&self, segments: &[&str]) -> Result<BridgeResponse> {
        let url = self.endpoint(segments);

        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(|source| Error::BridgeRequestFailed {
                url: url.to_string(),
                source,
            })?;

        Ok(BridgeResponse::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::fake::{FakeHttp, Method};

    const BASE: &str = "http://10.0.0.2/api/tester";

    fn client(http: FakeHttp) -> HueClient<FakeHttp> {
        HueClient::new(http, "10.0.0.2", "tester").unwrap()
    }

    #[tokio::test]
    async fn sets_group_state() {
        let url = format!("{BASE}/groups/1/action");
        let client = client(FakeHttp::new().respond(
            Method::Put,
            &url,
            200,
            r#"[{"success":{"/groups/1/action/hue":910}}]"#,
        ));

        let response = client
            .set_group_state("1", ColorCode::new(910))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.as_json().is_some());

        let requests = client.http().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, url);
        assert_eq!(requests[0].body, Some(json!({ "hue": 910 })));
    }

    #[tokio::test]
    async fn sets_light_state() {
        let url = format!("{BASE}/lights/7/state");
        let client = client(FakeHttp::new().respond(Method::Put, &url, 200, "[]"));

        client
            .set_light_state("7", ColorCode::new(60801))
            .await
            .unwrap();

        assert_eq!(client.http().requests()[0].url, url);
        assert_eq!(
            client.http().requests()[0].body,
            Some(json!({ "hue": 60801 }))
        );
    }

    #[tokio::test]
    async fn unauthorized_write_is_control_update_failed() {
        let url = format!("{BASE}/lights/7/state");
        let client = client(FakeHttp::new().respond(Method::Put, &url, 401, "unauthorized user"));

        let err = client
            .set_light_state("7", ColorCode::new(910))
            .await
            .unwrap_err();

        match err {
            Error::ControlUpdateFailed {
                target,
                status,
                body,
                source,
            } => {
                assert_eq!(target, LightTarget::light("7"));
                assert_eq!(status, Some(401));
                assert_eq!(body, Some(Body::RawText("unauthorized user".to_owned())));
                assert!(source.is_none());
            }
            other => panic!("expected ControlUpdateFailed, got {other:?}"),
        }
        assert_eq!(client.http().requests().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_bridge_is_control_update_failed() {
        let client = client(FakeHttp::new());

        let err = client
            .set_group_state("2", ColorCode::new(910))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::ControlUpdateFailed {
                status: None,
                body: None,
                source: Some(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn reads_pass_through_any_status() {
        let client = client(
            FakeHttp::new()
                .respond(Method::Get, format!("{BASE}/groups"), 200, r#"{"1":{"name":"Living"}}"#)
                .respond(Method::Get, format!("{BASE}/groups/9"), 404, "not found"),
        );

        let groups = client.get_groups().await.unwrap();
        assert_eq!(groups.body, Body::Decoded(json!({ "1": { "name": "Living" } })));

        let missing = client.get_group("9").await.unwrap();
        assert_eq!(missing.status, 404);
        assert_eq!(missing.body, Body::RawText("not found".to_owned()));
    }

    #[tokio::test]
    async fn unreachable_bridge_read_is_bridge_request_failed() {
        let client = client(FakeHttp::new());

        let err = client.get_groups().await.unwrap_err();

        assert!(matches!(err, Error::BridgeRequestFailed { ref url, .. } if url == &format!("{BASE}/groups")));
    }

    #[tokio::test]
    async fn encodes_target_id_in_path() {
        let url = format!("{BASE}/groups/living%20room%2F2/action");
        let client = client(FakeHttp::new().respond(Method::Put, &url, 200, "[]"));

        client
            .set_group_state("living room/2", ColorCode::new(910))
            .await
            .unwrap();

        assert_eq!(client.http().requests()[0].url, url);
    }

    #[test]
    fn rejects_invalid_bridge_address() {
        assert!(HueClient::new(FakeHttp::new(), "bad host", "tester").is_err());
    }

    #[test]
    fn displays_target() {
        assert_eq!(LightTarget::light("3").to_string(), "light 3");
        assert_eq!(LightTarget::group("0").to_string(), "group 0");
    }
}
