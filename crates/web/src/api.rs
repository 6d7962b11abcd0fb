use oracle_core::{Command, Event, EventBus, Interaction, Oracle, OracleError, Reply};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub reply: Option<Reply>,
    pub events: Vec<Event>,
    #[serde(skip)]
    pub status: u16,
}

impl ApiResponse {
    fn from_result(result: Result<Reply, OracleError>, events: &mut EventBus) -> Self {
        let events = events.drain().collect();
        match result {
            Ok(reply) => Self {
                ok: true,
                error: None,
                reply: Some(reply),
                events,
                status: 200,
            },
            Err(err) => {
                log::debug!("request rejected: {err}");
                Self {
                    ok: false,
                    error: Some(err.user_message()),
                    reply: None,
                    events,
                    status: 200,
                }
            }
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            reply: None,
            events: Vec::new(),
            status: 400,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub scope: u64,
    #[serde(flatten)]
    pub command: Command,
}

pub fn command(oracle: &Oracle, body: &str) -> ApiResponse {
    let request: CommandRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => return ApiResponse::bad_request(format!("invalid command: {err}")),
    };
    let mut events = EventBus::default();
    let result = oracle.handle_command(request.scope, request.command, &mut events);
    ApiResponse::from_result(result, &mut events)
}

pub fn interaction(oracle: &Oracle, body: &str) -> ApiResponse {
    let request: Interaction = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => return ApiResponse::bad_request(format!("invalid interaction: {err}")),
    };
    let mut events = EventBus::default();
    let result = oracle.handle_interaction(request, &mut events);
    ApiResponse::from_result(result, &mut events)
}
