// MCP server: JSON-RPC 2.0 over newline-delimited stdio

use crate::protocol::{
    negotiate_protocol_version, CallToolParams, CallToolResult, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use crate::tools::{ToolError, ToolRegistry};
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};

/// Default cap on the length of one request line.
pub const MAX_LINE_LENGTH: usize = 1024 * 1024;

const INSTRUCTIONS: &str = "Synchro Bus (Chambéry) transit data. Use linesGet to discover lines, \
lineStopAreasGet to find stop area IDs, then lineStopAreaSchedulesGet for departures. \
proximityGet finds stops and mobility services near coordinates.";

/// One unit read off the input stream.
#[derive(Debug, PartialEq, Eq)]
enum Frame {
    Line(String),
    /// A line longer than the cap; its bytes have been discarded.
    Oversized,
}

/// `LinesCodec` that reports over-long lines as a frame instead of an error.
///
/// `FramedRead` ends the stream after any decoder error, so the overflow has
/// to be surfaced as an item for reading to continue.
struct RequestCodec {
    lines: LinesCodec,
}

impl RequestCodec {
    fn new(max_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_length),
        }
    }

    fn map(result: Result<Option<String>, LinesCodecError>) -> Result<Option<Frame>, LinesCodecError> {
        match result {
            Ok(line) => Ok(line.map(Frame::Line)),
            Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Frame::Oversized)),
            Err(e) => Err(e),
        }
    }
}

impl Decoder for RequestCodec {
    type Item = Frame;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, LinesCodecError> {
        Self::map(self.lines.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, LinesCodecError> {
        Self::map(self.lines.decode_eof(buf))
    }
}

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(registry: ToolRegistry, info: ServerInfo) -> Self {
        Self {
            registry: Arc::new(registry),
            info,
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Serve on stdin/stdout until stdin closes.
    pub async fn start(self) -> Result<()> {
        tracing::info!(
            name = %self.info.name,
            version = %self.info.version,
            tools = self.registry.len(),
            "MCP server started"
        );
        Arc::new(self)
            .serve(tokio::io::stdin(), tokio::io::stdout())
            .await
    }

    /// Serve one connection.
    ///
    /// Requests are handled concurrently; responses are written one per line
    /// in completion order. Returns once the reader hits end of input and all
    /// in-flight requests have been answered.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut frames = FramedRead::new(reader, RequestCodec::new(self.max_line_length));
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(response) = rx.recv().await {
                let line = serde_json::to_string(&response).context("Failed to encode response")?;
                sink.send(line).await.context("Failed to write response")?;
            }
            Ok::<_, anyhow::Error>(())
        });

        while let Some(frame) = frames.next().await {
            let line = match frame {
                Ok(Frame::Line(line)) => line,
                Ok(Frame::Oversized) => {
                    tracing::warn!(max = self.max_line_length, "Dropping oversized message");
                    let _ = tx.send(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
                    continue;
                }
                Err(e) => return Err(e).context("Failed to read from client"),
            };

            if line.trim().is_empty() {
                continue;
            }

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    let _ = tx.send(response);
                }
            });
        }

        tracing::info!("Client closed input, shutting down");
        drop(tx);
        writer_task.await.context("Writer task panicked")??;
        Ok(())
    }

    /// Handle one raw message. Returns `None` when no reply is due.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse message");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);

        if value.get("method").is_none() {
            // Replies from the client; this server never issues requests.
            if value.get("result").is_some() || value.get("error").is_some() {
                return None;
            }
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(_) => return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        self.handle_request(request).await
    }

    /// Dispatch a decoded request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification received");
            return None;
        }
        let id = request.id.unwrap_or_default();

        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(request.params).await,
            method => {
                tracing::debug!(method, "Unknown method");
                Err(JsonRpcError::method_not_found(method))
            }
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e)))?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "Client connected");
        }

        let result = InitializeResult {
            protocol_version: negotiate_protocol_version(&params.protocol_version).to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: self.info.clone(),
            instructions: Some(INSTRUCTIONS.to_string()),
        };

        to_result(&result)
    }

    fn list_tools(&self) -> Result<Value, JsonRpcError> {
        to_result(&ListToolsResult {
            tools: self.registry.list_schemas(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tools/call params"))
            .and_then(|p| {
                serde_json::from_value(p)
                    .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)))
            })?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        tracing::debug!(tool = %params.name, "Calling tool");

        let result = match tool.execute(params.arguments).await {
            Ok(result) => result,
            Err(e @ ToolError::InvalidArguments { .. }) => {
                return Err(JsonRpcError::invalid_params(e.to_string()));
            }
            Err(e) => {
                tracing::error!(tool = %params.name, error = %e, "Tool failed");
                CallToolResult::error(format!("Error calling {}: {}", params.name, e))
            }
        };

        to_result(&result)
    }
}

fn to_result<T: serde::Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
