use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::core::app_state::{ViewerCommand, ViewerPhase};
use crate::engine::core::config::ViewerConfig;
use crate::engine::core::viewer_state::{ModelLoad, ViewerState};
use crate::engine::loading::model_loader::{ModelLoadFailed, ModelLoaded};
use crate::engine::systems::fps_tracking::smoothed_fps;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Outgoing message queues, flushed to the parent window at the end of each frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Read-only view of the viewer handed to request handlers.
pub struct RpcContext<'a> {
    pub state: &'a ViewerState,
    pub config: &'a ViewerConfig,
    pub phase: ViewerPhase,
    pub fps: f32,
}

pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    notify_load_outcome,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::{Arc, Mutex};

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        warn!("Window object not available; RPC listener not attached");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    state: Res<ViewerState>,
    config: Res<ViewerConfig>,
    phase: Res<State<ViewerPhase>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut viewer_commands: EventWriter<ViewerCommand>,
) {
    let context = RpcContext {
        state: &state,
        config: &config,
        phase: *phase.get(),
        fps: smoothed_fps(&diagnostics),
    };

    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
                continue;
            }
        };

        debug!("Processing RPC method: {}", request.method);
        let (response, command) = handle_rpc_request(&request, &context);
        if let Some(command) = command {
            viewer_commands.write(command);
        }
        if let Some(response) = response {
            rpc_interface.queue_response(response);
        }
    }
}

/// Dispatch one request. Returns the response (requests only) and any
/// lifecycle command the request asks for.
pub fn handle_rpc_request(
    request: &RpcRequest,
    context: &RpcContext,
) -> (Option<RpcResponse>, Option<ViewerCommand>) {
    let mut command = None;

    let result = match request.method.as_str() {
        "viewer_start" => {
            command = Some(ViewerCommand::Start);
            Ok(lifecycle_result(ViewerPhase::Running))
        }
        "viewer_stop" => {
            command = Some(ViewerCommand::Stop);
            Ok(lifecycle_result(ViewerPhase::Stopped))
        }
        "get_orientation" => Ok(orientation_result(context.state)),
        "get_load_status" => Ok(load_status_result(&context.state.load)),
        "get_viewer_config" => serde_json::to_value(context.config)
            .map_err(|e| RpcError::invalid_params(&e.to_string())),
        "get_fps" => Ok(serde_json::json!({ "fps": context.fps })),
        "get_phase" => Ok(serde_json::json!({ "phase": context.phase.as_str() })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    // Notifications (no id) still trigger commands but get no reply.
    let Some(id) = request.id.clone() else {
        return (None, command);
    };

    let response = match result {
        Ok(value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    };
    (Some(response), command)
}

fn lifecycle_result(requested: ViewerPhase) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "phase": requested.as_str(),
    })
}

fn orientation_result(state: &ViewerState) -> serde_json::Value {
    serde_json::json!({
        "pointer": [state.pointer.x, state.pointer.y],
        "target": state.target,
        "current": state.current,
        "remaining": state.current.distance(state.target),
        "model_loaded": state.model.is_some(),
    })
}

fn load_status_result(load: &ModelLoad) -> serde_json::Value {
    let mut result = serde_json::json!({
        "status": load.status(),
        "settled": load.is_settled(),
    });
    match load {
        ModelLoad::Ready { clips } => result["clips"] = serde_json::json!(clips),
        ModelLoad::Failed(error) => result["error"] = serde_json::json!(error.to_string()),
        _ => {}
    }
    result
}

fn notify_load_outcome(
    mut loaded: EventReader<ModelLoaded>,
    mut failed: EventReader<ModelLoadFailed>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in loaded.read() {
        rpc_interface.send_notification("model_loaded", serde_json::json!({ "clips": event.clips }));
    }
    for event in failed.read() {
        rpc_interface.send_notification(
            "model_load_failed",
            serde_json::json!({ "error": event.error.to_string() }),
        );
    }
}

fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize message: {}", e);
                return;
            }
        };
        let Some(window) = window() else {
            error!("Window object not available");
            return;
        };
        match window.parent().ok().flatten() {
            Some(parent) => {
                if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                    error!("Failed to send message to parent: {:?}", e);
                }
            }
            None => warn!("No parent window available for message transmission"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}
