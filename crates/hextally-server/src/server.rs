//! WebSocket server and connection handling.
//!
//! The service is stateless: every request carries everything needed to
//! answer it, so connections are fully independent and replies go straight
//! back on the same socket.

use crate::protocol::{ClientMessage, ServerMessage};
use chrono::Utc;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use hextally_core::{achievements, stats, Board, BoardSize};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message, WebSocketStream};
use tracing::{error, info, warn};
use uuid::Uuid;

type WsSender = SplitSink<WebSocketStream<TcpStream>, Message>;

/// Run the WebSocket server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Hextally server listening on {}", addr);

    while let Ok((stream, peer_addr)) = listener.accept().await {
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }

    Ok(())
}

/// Handle a single WebSocket connection.
async fn handle_connection(stream: TcpStream, addr: SocketAddr) -> anyhow::Result<()> {
    let ws_stream = accept_async(stream).await?;

    // Assign a client ID for log correlation
    let client_id = Uuid::new_v4();
    info!("New WebSocket connection from {} as {}", addr, client_id);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    send(&mut ws_sender, &ServerMessage::Welcome { client_id }).await?;

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let reply = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(request) => handle_request(request),
                    Err(e) => {
                        warn!("Invalid message from {}: {}", client_id, text);
                        ServerMessage::Error {
                            message: format!("invalid request: {}", e),
                        }
                    }
                };
                send(&mut ws_sender, &reply).await?;
            }
            Ok(Message::Close(_)) => {
                info!("Client {} closing connection", client_id);
                break;
            }
            Ok(Message::Ping(data)) => {
                ws_sender.send(Message::Pong(data)).await?;
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", client_id, e);
                break;
            }
            _ => {}
        }
    }

    info!("Connection closed for {}", client_id);
    Ok(())
}

async fn send(sender: &mut WsSender, msg: &ServerMessage) -> anyhow::Result<()> {
    let text = serde_json::to_string(msg)?;
    sender.send(Message::Text(text.into())).await?;
    Ok(())
}

/// Answer a single client request.
///
/// Pure request -> response; all the socket plumbing stays in
/// `handle_connection`.
fn handle_request(request: ClientMessage) -> ServerMessage {
    match request {
        ClientMessage::GenerateBoard { size } => match BoardSize::try_from(size) {
            Ok(size) => {
                let board = Board::generate(size);
                info!("Generated {:?} board with {} tiles", size, board.len());
                ServerMessage::Board {
                    size,
                    tiles: board.tiles().to_vec(),
                }
            }
            Err(e) => ServerMessage::Error {
                message: e.to_string(),
            },
        },

        ClientMessage::Leaderboard { sessions } => {
            let standings = stats::leaderboard(&sessions, Utc::now());
            ServerMessage::Leaderboard { standings }
        }

        ClientMessage::PlayerAchievements { player, sessions } => {
            let earned = achievements::earned(&player, &sessions, Utc::now())
                .into_iter()
                .map(String::from)
                .collect();
            ServerMessage::PlayerAchievements { player, earned }
        }

        ClientMessage::Ping => ServerMessage::Pong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_board_request() {
        let reply = handle_request(ClientMessage::GenerateBoard { size: 3 });
        match reply {
            ServerMessage::Board { size, tiles } => {
                assert_eq!(size, BoardSize::Small);
                assert_eq!(tiles.len(), 37); // 19 land + 18 sea
            }
            other => panic!("expected a board, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_size_becomes_an_error_reply() {
        let reply = handle_request(ClientMessage::GenerateBoard { size: 4 });
        match reply {
            ServerMessage::Error { message } => {
                assert!(message.contains("unsupported board size"));
            }
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[test]
    fn test_ping_pong() {
        assert!(matches!(
            handle_request(ClientMessage::Ping),
            ServerMessage::Pong
        ));
    }

    #[test]
    fn test_leaderboard_over_empty_history() {
        let reply = handle_request(ClientMessage::Leaderboard { sessions: vec![] });
        match reply {
            ServerMessage::Leaderboard { standings } => assert!(standings.is_empty()),
            other => panic!("expected standings, got {:?}", other),
        }
    }
}
