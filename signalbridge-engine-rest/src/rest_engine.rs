/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

//! Interactions with a remote process engine using its REST API.

mod rest_dto;
mod rest_facades;

use self::rest_facades::RestRuntimeServiceFacades;
use reqwest::Client;
use reqwest::ClientBuilder;
use reqwest::Error;
use reqwest::Response;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use signalbridge_engine::engine::RuntimeService;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::EngineErrorKind;
use std::sync::Arc;
use std::time::Duration;

/// Client for a remote process engine using the REST API.
pub struct RestProcessEngine {
    api_base_url: Url,
    // Client uses an Arc internally, so it doesn't need Arc<> wrapping here
    client: Client,
}

impl RestProcessEngine {
    const MIME_APPLICATION_JSON: &'static str = "application/json";

    /// Return a new instance.
    ///
    /// `api_base_url` is the root of the engine REST API, like
    /// `http://localhost:8080/engine-rest`.
    pub fn new(
        api_base_url: &str,
        app_name_lowercase: &str,
        app_version: &str,
        pool_size: usize,
        timeout: Duration,
    ) -> Result<Arc<Self>, EngineError> {
        let api_base_url = Url::parse(api_base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                EngineErrorKind::Unspecified
                    .error_with_msg(format!("Invalid engine REST API URL '{api_base_url}'."))
            })?;
        let user_agent = format!("{app_name_lowercase}/{app_version}");
        log::debug!("user_agent: {user_agent}. pool_size: {pool_size}");
        let client = ClientBuilder::new()
            .user_agent(user_agent)
            .referer(false)
            .brotli(true)
            .pool_max_idle_per_host(pool_size)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                EngineErrorKind::Unspecified
                    .error_with_msg(format!("Failed to create HTTP client: {e}"))
            })?;
        Ok(Arc::new(Self {
            api_base_url,
            client,
        }))
    }

    /// Get [RuntimeService] instance.
    pub fn as_runtime_service(self: &Arc<Self>) -> RuntimeService {
        RuntimeService::new(Arc::new(RestRuntimeServiceFacades::new(self)))
    }

    /// Return the absolute URL of an API resource.
    ///
    /// Each segment is percent-encoded, so identifiers issued by the engine
    /// can't escape their path segment.
    fn url(&self, path_segments: &[&str]) -> Result<Url, EngineError> {
        let mut url = self.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                EngineErrorKind::Unspecified
                    .error_with_msg(format!("'{}' can't be a base URL.", self.api_base_url))
            })?
            .pop_if_empty()
            .extend(path_segments);
        Ok(url)
    }

    /// Perform a GET request with query parameters and parse the JSON
    /// response body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path_segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, EngineError> {
        let url = self.url(path_segments)?;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("GET '{url}' with query {query:?}.");
        }
        let result = self
            .client
            .get(url.clone())
            .query(query)
            .header(&ACCEPT, Self::MIME_APPLICATION_JSON)
            .send()
            .await;
        let body = Self::successful_response_body(result, url.as_str()).await?;
        serde_json::from_str(&body).map_err(|e| {
            EngineErrorKind::MalformedResponse
                .error_with_msg(format!("Failed to parse JSON response from '{url}': {e}"))
        })
    }

    /// Perform a POST request with a JSON body and discard any response body.
    async fn post_json<B: Serialize>(
        &self,
        path_segments: &[&str],
        body: &B,
    ) -> Result<(), EngineError> {
        let url = self.url(path_segments)?;
        let request_json_string = serde_json::to_string(body).map_err(|e| {
            EngineErrorKind::Unspecified
                .error_with_msg(format!("Failed to serialize request to '{url}': {e}"))
        })?;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Sending body to '{url}': {request_json_string}");
        }
        let result = self
            .client
            .post(url.clone())
            .body(request_json_string)
            .header(&CONTENT_TYPE, Self::MIME_APPLICATION_JSON)
            .send()
            .await;
        Self::successful_response_body(result, url.as_str())
            .await
            .map(|_| ())
    }

    /// Return the response body as text if the HTTP status code signals
    /// success.
    async fn successful_response_body(
        result: Result<Response, Error>,
        url: &str,
    ) -> Result<String, EngineError> {
        let response = result.map_err(|e| {
            log::info!("Failed request to '{url}': {:?}", e.without_url());
            EngineErrorKind::Unreachable.error_with_msg(format!("Failed request to '{url}'."))
        })?;
        let status_code = response.status();
        let body = response.text().await.map_err(|e| {
            EngineErrorKind::MalformedResponse.error_with_msg(format!(
                "Failed to read response body from '{url}': {:?}",
                e.without_url()
            ))
        })?;
        if status_code.is_success() {
            Ok(body)
        } else {
            Err(Self::error_from_status(status_code, url, &body))
        }
    }

    /// Map a non-successful HTTP status code to an [EngineError].
    fn error_from_status(status_code: StatusCode, url: &str, body: &str) -> EngineError {
        let message = rest_dto::ExceptionDto::message_from_body(body)
            .map(|message| format!("Request to '{url}' failed with {status_code}: {message}"))
            .unwrap_or_else(|| format!("Request to '{url}' failed with {status_code}."));
        match status_code {
            StatusCode::NOT_FOUND => EngineErrorKind::NotFound.error_with_msg(message),
            _ => EngineErrorKind::ClientFailure.error_with_msg(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signalbridge_engine::engine::facades::RuntimeServiceFacades;
    use signalbridge_engine::model::Execution;
    use signalbridge_engine::model::ExecutionQuery;
    use signalbridge_engine::model::ProcessInstanceQuery;
    use signalbridge_engine::model::VariableMap;
    use std::sync::Mutex;
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;
    use tokio::net::TcpStream;

    fn rest_engine(api_base_url: &str) -> Arc<RestProcessEngine> {
        RestProcessEngine::new(api_base_url, "signalbridge", "0.0.0", 1, Duration::from_secs(1))
            .unwrap()
    }

    /// Request line and body of a request seen by [StubEngine].
    #[derive(Debug, Clone)]
    struct ReceivedRequest {
        request_line: String,
        body: String,
    }

    /// Local HTTP server answering each connection with the next canned
    /// response.
    struct StubEngine {
        api_base_url: String,
        requests: Arc<Mutex<Vec<ReceivedRequest>>>,
    }

    impl StubEngine {
        async fn serve(responses: Vec<(u16, &'static str)>) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let api_base_url = format!("http://{}/engine-rest", listener.local_addr().unwrap());
            let requests = Arc::new(Mutex::new(Vec::new()));
            let received = Arc::clone(&requests);
            tokio::spawn(async move {
                for (status, body) in responses {
                    let (mut stream, _) = listener.accept().await.unwrap();
                    let request = Self::read_request(&mut stream).await;
                    received.lock().unwrap().push(request);
                    let response = format!(
                        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    stream.write_all(response.as_bytes()).await.unwrap();
                    stream.shutdown().await.ok();
                }
            });
            Self {
                api_base_url,
                requests,
            }
        }

        async fn read_request(stream: &mut TcpStream) -> ReceivedRequest {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let header_end = loop {
                let read = stream.read(&mut chunk).await.unwrap();
                assert!(read > 0, "Connection closed before end of request headers.");
                buf.extend_from_slice(&chunk[..read]);
                if let Some(pos) = buf.windows(4).position(|window| window == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while buf.len() < header_end + content_length {
                let read = stream.read(&mut chunk).await.unwrap();
                assert!(read > 0, "Connection closed before end of request body.");
                buf.extend_from_slice(&chunk[..read]);
            }
            ReceivedRequest {
                request_line: head.lines().next().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&buf[header_end..header_end + content_length])
                    .to_string(),
            }
        }

        fn runtime_service(&self) -> RuntimeService {
            rest_engine(&self.api_base_url).as_runtime_service()
        }

        fn requests(&self) -> Vec<ReceivedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[test]
    fn url_joins_base_and_path() {
        let engine = rest_engine("http://localhost:8080/engine-rest/");
        assert_eq!(
            engine
                .url(&["execution", "exec-7", "signal"])
                .unwrap()
                .as_str(),
            "http://localhost:8080/engine-rest/execution/exec-7/signal"
        );
        let engine = rest_engine("http://localhost:8080/engine-rest");
        assert_eq!(
            engine.url(&["execution"]).unwrap().as_str(),
            "http://localhost:8080/engine-rest/execution"
        );
    }

    #[test]
    fn engine_ids_are_percent_encoded() {
        let engine = rest_engine("http://localhost:8080/engine-rest");
        assert_eq!(
            engine
                .url(&["execution", "../process-instance/x y", "signal"])
                .unwrap()
                .as_str(),
            "http://localhost:8080/engine-rest/execution/..%2Fprocess-instance%2Fx%20y/signal"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = RestProcessEngine::new(
            "engine-rest",
            "signalbridge",
            "0.0.0",
            1,
            Duration::from_secs(1),
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), &EngineErrorKind::Unspecified);
    }

    #[test]
    fn status_codes_map_to_error_kinds() {
        let err = RestProcessEngine::error_from_status(
            StatusCode::NOT_FOUND,
            "http://localhost/engine-rest/execution/exec-7/signal",
            r#"{"type":"RestException","message":"Execution exec-7 does not exist"}"#,
        );
        assert_eq!(err.kind(), &EngineErrorKind::NotFound);
        assert!(
            err.msg()
                .is_some_and(|msg| msg.contains("Execution exec-7 does not exist"))
        );
        let err = RestProcessEngine::error_from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "http://localhost/engine-rest/execution",
            "<html>oops</html>",
        );
        assert_eq!(err.kind(), &EngineErrorKind::ClientFailure);
    }

    #[tokio::test]
    async fn single_execution_skips_ended_and_rejects_several() {
        let stub = StubEngine::serve(vec![
            (
                200,
                r#"[{"id":"exec-1","processInstanceId":"inst-42","ended":true},{"id":"exec-7","processInstanceId":"inst-42","ended":false}]"#,
            ),
            (
                200,
                r#"[{"id":"exec-7","processInstanceId":"inst-42"},{"id":"exec-8","processInstanceId":"inst-42"}]"#,
            ),
        ])
        .await;
        let runtime_service = stub.runtime_service();
        let query = ExecutionQuery::default()
            .process_instance_id("inst-42")
            .activity_id("review");
        let execution = runtime_service
            .execution_facade()
            .single_execution(&query)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(execution.get_id(), "exec-7");
        assert_eq!(execution.get_activity_id(), Some("review"));
        let err = runtime_service
            .execution_facade()
            .single_execution(&query)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::NonUniqueResult);
        assert_eq!(
            stub.requests()[0].request_line,
            "GET /engine-rest/execution?processInstanceId=inst-42&activityId=review HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn single_process_instance_skips_ended() {
        let stub = StubEngine::serve(vec![(
            200,
            r#"[{"id":"inst-1","businessKey":"order-1","ended":true},{"id":"inst-42","businessKey":"order-1","ended":false}]"#,
        )])
        .await;
        let process_instance = stub
            .runtime_service()
            .process_instance_facade()
            .single_process_instance(&ProcessInstanceQuery::default().business_key("order-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(process_instance.get_id(), "inst-42");
        assert_eq!(
            stub.requests()[0].request_line,
            "GET /engine-rest/process-instance?businessKey=order-1 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn variables_are_set_on_process_instance() {
        let stub = StubEngine::serve(vec![(204, "")]).await;
        let execution = Execution::new("exec-7", "inst-42", Some("review"), None);
        let variables = VariableMap::from([
            ("approved".to_string(), serde_json::json!(true)),
            ("amount".to_string(), serde_json::json!(12)),
        ]);
        stub.runtime_service()
            .variable_facade()
            .set_variables(&execution, &variables)
            .await
            .unwrap();
        let requests = stub.requests();
        assert_eq!(
            requests[0].request_line,
            "POST /engine-rest/process-instance/inst-42/variables HTTP/1.1"
        );
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&requests[0].body).unwrap(),
            serde_json::json!({"modifications": {
                "approved": {"value": true, "type": "Boolean"},
                "amount": {"value": 12, "type": "Long"},
            }})
        );
    }

    #[tokio::test]
    async fn signal_posts_empty_document() {
        let stub = StubEngine::serve(vec![(204, ""), (204, "")]).await;
        let runtime_service = stub.runtime_service();
        runtime_service
            .execution_facade()
            .signal("exec-7")
            .await
            .unwrap();
        runtime_service
            .execution_facade()
            .signal("exec/8")
            .await
            .unwrap();
        let requests = stub.requests();
        assert_eq!(
            requests[0].request_line,
            "POST /engine-rest/execution/exec-7/signal HTTP/1.1"
        );
        assert_eq!(requests[0].body, "{}");
        assert_eq!(
            requests[1].request_line,
            "POST /engine-rest/execution/exec%2F8/signal HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn failed_responses_map_to_error_kinds() {
        let stub = StubEngine::serve(vec![
            (200, "not json"),
            (
                404,
                r#"{"type":"RestException","message":"Execution exec-7 does not exist"}"#,
            ),
            (500, "<html>oops</html>"),
        ])
        .await;
        let runtime_service = stub.runtime_service();
        let err = runtime_service
            .execution_facade()
            .single_execution(&ExecutionQuery::default().process_instance_id("inst-42"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::MalformedResponse);
        let err = runtime_service
            .execution_facade()
            .signal("exec-7")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::NotFound);
        let err = runtime_service
            .execution_facade()
            .signal("exec-7")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::ClientFailure);
    }

    #[tokio::test]
    async fn unreachable_engine() {
        let api_base_url = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            format!("http://{}/engine-rest", listener.local_addr().unwrap())
        };
        let err = rest_engine(&api_base_url)
            .as_runtime_service()
            .execution_facade()
            .signal("exec-7")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::Unreachable);
    }
}
