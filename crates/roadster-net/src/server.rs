//! Controller side of the remote control channel.
//!
//! A blocking request/response loop: one sensor datagram in, one control
//! datagram back to its sender. Each sender address gets its own pursuit
//! memory, so several vehicles can share one controller. Memory for an
//! address is forgotten once it goes quiet, or when too many are held.

use std::collections::HashMap;
use std::net::{SocketAddr, UdpSocket};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use roadster_autopilot::{decide_with, PursuitGains, PursuitMemory};
use roadster_core::constants::{CONTROLLER_CLIENT_IDLE_SECS, MAX_CONTROLLER_CLIENTS, RECV_BUFFER_LEN};
use roadster_core::types::{ControlInput, SensorData};

use crate::error::NetError;

/// Pursuit memory of one vehicle address.
#[derive(Debug, Clone, Copy)]
struct VehicleSlot {
    memory: PursuitMemory,
    last_seen: Instant,
}

pub struct ControllerServer {
    socket: UdpSocket,
    gains: PursuitGains,
    vehicles: HashMap<SocketAddr, VehicleSlot>,
    idle_timeout: Duration,
    max_clients: usize,
    served: u64,
}

impl ControllerServer {
    pub fn bind(addr: &str) -> Result<Self, NetError> {
        Self::with_gains(addr, PursuitGains::default())
    }

    pub fn with_gains(addr: &str, gains: PursuitGains) -> Result<Self, NetError> {
        let socket = UdpSocket::bind(addr)?;
        info!(addr = %socket.local_addr()?, "controller listening");
        Ok(Self {
            socket,
            gains,
            vehicles: HashMap::new(),
            idle_timeout: Duration::from_secs(CONTROLLER_CLIENT_IDLE_SECS),
            max_clients: MAX_CONTROLLER_CLIENTS,
            served: 0,
        })
    }

    /// Override how long a quiet address keeps its memory and how many
    /// addresses are tracked at once.
    pub fn with_limits(mut self, idle_timeout: Duration, max_clients: usize) -> Self {
        self.idle_timeout = idle_timeout;
        self.max_clients = max_clients;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, NetError> {
        Ok(self.socket.local_addr()?)
    }

    /// Number of vehicles currently holding pursuit memory.
    pub fn client_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Replies sent so far.
    pub fn served(&self) -> u64 {
        self.served
    }

    /// Block until a well-formed sensor datagram arrives. Malformed
    /// datagrams are dropped.
    pub fn recv_sensor(&self) -> Result<(SensorData, SocketAddr), NetError> {
        let mut buf = [0u8; RECV_BUFFER_LEN];
        loop {
            let (len, from) = self.socket.recv_from(&mut buf)?;
            match SensorData::from_bytes(&buf[..len]) {
                Ok(sensor) => return Ok((sensor, from)),
                Err(err) => debug!(%from, error = %err, "ignoring malformed sensor packet"),
            }
        }
    }

    pub fn reply(&self, input: ControlInput, to: SocketAddr) -> Result<(), NetError> {
        self.socket.send_to(&input.to_bytes(), to)?;
        Ok(())
    }

    /// Run the pursuit law for one reading from `from`.
    pub fn compute(&mut self, sensor: &SensorData, from: SocketAddr) -> ControlInput {
        self.compute_at(sensor, from, Instant::now())
    }

    pub(crate) fn compute_at(
        &mut self,
        sensor: &SensorData,
        from: SocketAddr,
        now: Instant,
    ) -> ControlInput {
        if !self.vehicles.contains_key(&from) {
            self.evict(now);
            info!(%from, "new vehicle");
        }
        let slot = self.vehicles.entry(from).or_insert(VehicleSlot {
            memory: PursuitMemory::default(),
            last_seen: now,
        });
        slot.last_seen = now;
        decide_with(sensor, &mut slot.memory, &self.gains)
    }

    /// Forget idle addresses, then the least recently seen ones until
    /// there is room for one more.
    fn evict(&mut self, now: Instant) {
        let idle_timeout = self.idle_timeout;
        self.vehicles.retain(|addr, slot| {
            let keep = now.saturating_duration_since(slot.last_seen) <= idle_timeout;
            if !keep {
                debug!(%addr, "forgetting idle vehicle");
            }
            keep
        });

        while self.vehicles.len() >= self.max_clients {
            let Some(oldest) = self
                .vehicles
                .iter()
                .min_by_key(|(_, slot)| slot.last_seen)
                .map(|(addr, _)| *addr)
            else {
                break;
            };
            self.vehicles.remove(&oldest);
            debug!(addr = %oldest, "vehicle limit reached, forgetting least recent");
        }
    }

    /// Receive one reading, answer it, and return what was sent.
    pub fn serve_one(&mut self) -> Result<(SocketAddr, ControlInput), NetError> {
        let (sensor, from) = self.recv_sensor()?;
        let input = self.compute(&sensor, from);
        self.reply(input, from)?;
        self.served += 1;
        Ok((from, input))
    }

    /// Serve forever. A failed reply is logged and the loop continues; a
    /// failed receive ends the loop.
    pub fn serve(&mut self) -> Result<(), NetError> {
        loop {
            let (sensor, from) = self.recv_sensor()?;
            let input = self.compute(&sensor, from);
            match self.reply(input, from) {
                Ok(()) => self.served += 1,
                Err(err) => warn!(%from, error = %err, "reply failed"),
            }
        }
    }
}
