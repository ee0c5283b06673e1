//! Vehicle side of the remote control channel.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use tracing::{debug, info, trace};

use roadster_core::constants::RECV_BUFFER_LEN;
use roadster_core::control::ControlSource;
use roadster_core::error::ControlError;
use roadster_core::types::{ControlInput, SensorData};

use crate::error::NetError;

/// Sends one sensor reading per tick and adopts the newest reply, falling
/// back to the last received input when nothing has arrived.
pub struct RemoteClient {
    socket: UdpSocket,
    controller: SocketAddr,
    last_control: ControlInput,
    stale_ticks: u64,
}

/// Resolve a host:port to its first socket address.
pub fn resolve(addr: &str) -> Result<SocketAddr, NetError> {
    addr.to_socket_addrs()?
        .next()
        .ok_or_else(|| NetError::Resolve {
            addr: addr.to_string(),
        })
}

impl RemoteClient {
    /// Open an ephemeral local socket toward `controller`.
    pub fn connect(controller: &str) -> Result<Self, NetError> {
        Self::bind("0.0.0.0:0", controller)
    }

    /// Open a socket on `local` toward `controller`.
    pub fn bind(local: &str, controller: &str) -> Result<Self, NetError> {
        let controller = resolve(controller)?;
        let socket = UdpSocket::bind(local)?;
        socket.set_nonblocking(true)?;
        info!(local = %socket.local_addr()?, %controller, "remote control channel open");
        Ok(Self {
            socket,
            controller,
            last_control: ControlInput::ZERO,
            stale_ticks: 0,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, NetError> {
        Ok(self.socket.local_addr()?)
    }

    pub fn controller_addr(&self) -> SocketAddr {
        self.controller
    }

    /// The input applied when no fresh reply is available.
    pub fn last_control(&self) -> ControlInput {
        self.last_control
    }

    /// Consecutive ticks that fell back to the last received input.
    pub fn stale_ticks(&self) -> u64 {
        self.stale_ticks
    }

    pub fn send_sensor(&self, sensor: &SensorData) -> Result<(), NetError> {
        self.socket.send_to(&sensor.to_bytes(), self.controller)?;
        Ok(())
    }

    /// Drain every queued reply and adopt the newest well-formed one as the
    /// last received input. Never blocks.
    ///
    /// A socket error ends the drain, but whatever arrived before it is
    /// still adopted.
    pub fn try_recv_control(&mut self) -> Result<Option<ControlInput>, NetError> {
        let (newest, err) = drain_replies(|buf| self.socket.recv_from(buf));
        if let Some(input) = newest {
            self.last_control = input;
            self.stale_ticks = 0;
        }
        match err {
            Some(err) => Err(err.into()),
            None => Ok(newest),
        }
    }

    /// One tick of the exchange: send, poll, and pick fresh or stale input.
    pub fn exchange(&mut self, sensor: &SensorData) -> Result<ControlInput, NetError> {
        self.send_sensor(sensor)?;
        if self.try_recv_control()?.is_none() {
            self.stale_ticks += 1;
            trace!(
                tick = sensor.time,
                stale_ticks = self.stale_ticks,
                "no reply, reusing last input"
            );
        }
        Ok(self.last_control)
    }
}

/// Pull datagrams from `recv` until it would block or fails. Returns the
/// newest well-formed control input and the error that stopped the drain,
/// if any.
pub(crate) fn drain_replies(
    mut recv: impl FnMut(&mut [u8]) -> io::Result<(usize, SocketAddr)>,
) -> (Option<ControlInput>, Option<io::Error>) {
    let mut buf = [0u8; RECV_BUFFER_LEN];
    let mut newest = None;
    loop {
        match recv(&mut buf) {
            Ok((len, from)) => match ControlInput::from_bytes(&buf[..len]) {
                Ok(input) => newest = Some(input),
                Err(err) => debug!(%from, error = %err, "ignoring malformed reply"),
            },
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => return (newest, None),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return (newest, Some(err)),
        }
    }
}

impl ControlSource for RemoteClient {
    fn decide(&mut self, sensor: &SensorData) -> Result<ControlInput, ControlError> {
        Ok(self.exchange(sensor)?)
    }
}
