//! Production [`KvBackend`] over a real sorted-set server, via the `redis`
//! crate.

use redis::{Client, Commands};

use super::{BackendError, KvBackend};
use crate::config::Config;

impl From<redis::RedisError> for BackendError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal() {
            BackendError::Unavailable(err.to_string())
        } else {
            BackendError::Protocol(err.to_string())
        }
    }
}

/// Synchronous connection to a sorted-set server, opened from a [`Config`].
pub struct RedisBackend {
    conn: redis::Connection,
}

impl RedisBackend {
    /// Opens a connection per the given configuration. `config.debug` only
    /// controls log verbosity on this side; it does not alter protocol
    /// behavior.
    pub fn connect(config: &Config) -> Result<Self, BackendError> {
        let url = connection_url(config);
        let client = Client::open(url)?;
        let conn = client.get_connection()?;
        if config.debug {
            log::debug!("acorkv: connected to backend at {}", config.addr);
        }
        Ok(Self { conn })
    }
}

fn connection_url(config: &Config) -> String {
    if config.password.is_empty() {
        format!("redis://{}/{}", config.addr, config.db)
    } else {
        format!("redis://:{}@{}/{}", config.password, config.addr, config.db)
    }
}

impl KvBackend for RedisBackend {
    fn set_add(&mut self, key: &str, members: &[&str]) -> Result<u64, BackendError> {
        Ok(self.conn.sadd(key, members)?)
    }

    fn set_rem(&mut self, key: &str, members: &[&str]) -> Result<u64, BackendError> {
        Ok(self.conn.srem(key, members)?)
    }

    fn set_card(&mut self, key: &str) -> Result<u64, BackendError> {
        Ok(self.conn.scard(key)?)
    }

    fn set_is_member(&mut self, key: &str, member: &str) -> Result<bool, BackendError> {
        Ok(self.conn.sismember(key, member)?)
    }

    fn set_members(&mut self, key: &str) -> Result<Vec<String>, BackendError> {
        Ok(self.conn.smembers(key)?)
    }

    fn del(&mut self, key: &str) -> Result<u64, BackendError> {
        Ok(self.conn.del(key)?)
    }

    fn zadd(&mut self, key: &str, member: &str) -> Result<u64, BackendError> {
        Ok(self.conn.zadd(key, member, 0.0)?)
    }

    fn zrem(&mut self, key: &str, member: &str) -> Result<u64, BackendError> {
        Ok(self.conn.zrem(key, member)?)
    }

    fn zcard(&mut self, key: &str) -> Result<u64, BackendError> {
        Ok(self.conn.zcard(key)?)
    }

    fn zscore(&mut self, key: &str, member: &str) -> Result<Option<f64>, BackendError> {
        Ok(self.conn.zscore(key, member)?)
    }

    fn zrank(&mut self, key: &str, member: &str) -> Result<Option<u64>, BackendError> {
        Ok(self.conn.zrank(key, member)?)
    }

    fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, BackendError> {
        Ok(self.conn.zrange(key, start as isize, stop as isize)?)
    }

    fn close(&mut self) -> Result<(), BackendError> {
        // `redis::Connection` has no explicit close; the socket is released
        // on drop. Nothing else to flush or await.
        Ok(())
    }
}
