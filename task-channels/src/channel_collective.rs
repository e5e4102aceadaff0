use async_trait::async_trait;
use geo_grid_core::collective::{Collective, CommError, Communicator};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::mpsc;

/// Collective over in-process tokio channels, one task per rank.
///
/// Payloads cross the channels as serde_json bytes, so every rank
/// deserializes its own copy of broadcast data, exactly as a socket or
/// process transport would behave. Rank 0 is the coordinator: it holds the
/// sending half of one broadcast channel and the receiving half of one
/// gather channel per peer; reading the gather channels in rank order
/// restores the ordering the coordinator needs.
pub struct ChannelCollective {
    rank: usize,
    size: usize,
    /// Coordinator side: broadcast sender per peer, indexed by rank - 1.
    broadcast_txs: Vec<mpsc::Sender<Vec<u8>>>,
    /// Peer side: receives broadcast payloads from the coordinator.
    broadcast_rx: Option<mpsc::Receiver<Vec<u8>>>,
    /// Coordinator side: gather receiver per peer, indexed by rank - 1.
    gather_rxs: Vec<mpsc::Receiver<Vec<u8>>>,
    /// Peer side: sends gather contributions to the coordinator.
    gather_tx: Option<mpsc::Sender<Vec<u8>>>,
}

impl ChannelCollective {
    /// Wire up one handle per rank. Rank 0 is the coordinator.
    pub fn create(size: usize) -> Vec<ChannelCollective> {
        assert!(size > 0, "a collective needs at least one worker");

        let mut broadcast_txs = Vec::with_capacity(size - 1);
        let mut broadcast_rxs = Vec::with_capacity(size - 1);
        let mut gather_txs = Vec::with_capacity(size - 1);
        let mut gather_rxs = Vec::with_capacity(size - 1);
        for _ in 1..size {
            let (tx, rx) = mpsc::channel(1);
            broadcast_txs.push(tx);
            broadcast_rxs.push(rx);
            let (tx, rx) = mpsc::channel(1);
            gather_txs.push(tx);
            gather_rxs.push(rx);
        }

        let mut handles = Vec::with_capacity(size);
        handles.push(ChannelCollective {
            rank: 0,
            size,
            broadcast_txs,
            broadcast_rx: None,
            gather_rxs,
            gather_tx: None,
        });
        for (peer, (broadcast_rx, gather_tx)) in
            broadcast_rxs.into_iter().zip(gather_txs).enumerate()
        {
            handles.push(ChannelCollective {
                rank: peer + 1,
                size,
                broadcast_txs: Vec::new(),
                broadcast_rx: Some(broadcast_rx),
                gather_rxs: Vec::new(),
                gather_tx: Some(gather_tx),
            });
        }
        handles
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CommError> {
    serde_json::to_vec(value).map_err(|e| CommError::Codec(e.to_string()))
}

fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, CommError> {
    serde_json::from_slice(payload).map_err(|e| CommError::Codec(e.to_string()))
}

impl Communicator for ChannelCollective {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[async_trait]
impl Collective for ChannelCollective {
    async fn broadcast<T>(&mut self, value: Option<T>) -> Result<T, CommError>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        if self.is_coordinator() {
            let value = value.ok_or_else(|| {
                CommError::Protocol("broadcast without a value on the coordinator".to_string())
            })?;
            let payload = encode(&value)?;
            for tx in &self.broadcast_txs {
                tx.send(payload.clone())
                    .await
                    .map_err(|_| CommError::Disconnected)?;
            }
            Ok(value)
        } else {
            let rx = self.broadcast_rx.as_mut().ok_or_else(|| {
                CommError::Protocol("rank has no broadcast receiver".to_string())
            })?;
            let payload = rx.recv().await.ok_or(CommError::Disconnected)?;
            decode(&payload)
        }
    }

    async fn gather<T>(&mut self, value: T) -> Result<Option<Vec<T>>, CommError>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        if self.is_coordinator() {
            // Own contribution first, then each peer in rank order.
            let mut values = Vec::with_capacity(self.size);
            values.push(value);
            for rx in &mut self.gather_rxs {
                let payload = rx.recv().await.ok_or(CommError::Disconnected)?;
                values.push(decode(&payload)?);
            }
            Ok(Some(values))
        } else {
            let payload = encode(&value)?;
            let tx = self.gather_tx.as_ref().ok_or_else(|| {
                CommError::Protocol("rank has no gather sender".to_string())
            })?;
            tx.send(payload).await.map_err(|_| CommError::Disconnected)?;
            Ok(None)
        }
    }
}
