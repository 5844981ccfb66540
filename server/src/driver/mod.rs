// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Business logic for the service.

use futures::lock::Mutex;
use log::debug;
use lru_time_cache::LruCache;
use partial_uri_core::driver::{DriverError, DriverResult};
use partial_uri_core::env::get_optional_var;
use partial_uri_template::{PartialUriTemplate, TemplateError};
use std::sync::Arc;
use std::time::Duration;

mod expand;
#[cfg(test)]
mod testutils;

/// Default TTL of the parsed templates kept in the cache.
const DEFAULT_CACHE_TTL_SECONDS: u64 = 60 * 60;

/// Default number of parsed templates kept in the cache.
const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Configuration options for the driver.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct DriverOptions {
    /// The TTL for the parsed templates in the cache.
    pub cache_ttl: Duration,

    /// The cache capacity in number of parsed templates.
    pub cache_capacity: usize,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl DriverOptions {
    /// Creates a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_TTL` and `<prefix>_CAPACITY`.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        Ok(Self {
            cache_ttl: get_optional_var::<Duration>(prefix, "TTL")?
                .unwrap_or_else(|| Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS)),
            cache_capacity: get_optional_var::<usize>(prefix, "CAPACITY")?
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
        })
    }
}

/// Converts an engine error into the error type of this layer.
fn invalid_input(e: TemplateError) -> DriverError {
    DriverError::InvalidInput(e.to_string())
}

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": every operation resolves the
/// template it receives first, and parsed templates are shared across operations via a cache.
#[derive(Clone)]
pub(crate) struct Driver {
    /// Cache of successfully parsed templates keyed by their raw text.
    cache: Arc<Mutex<LruCache<String, Arc<PartialUriTemplate>>>>,
}

impl Driver {
    /// Creates a new driver configured with `opts`.
    pub(crate) fn new(opts: DriverOptions) -> Self {
        let cache =
            LruCache::with_expiry_duration_and_capacity(opts.cache_ttl, opts.cache_capacity);
        Self { cache: Arc::from(Mutex::from(cache)) }
    }

    /// Obtains the parsed form of the `raw` template, parsing it only if it is not cached yet.
    ///
    /// Templates that fail to parse are never cached.
    async fn parse(&self, raw: &str) -> DriverResult<Arc<PartialUriTemplate>> {
        {
            let mut cache = self.cache.lock().await;
            if let Some(template) = cache.get(raw) {
                return Ok(template.clone());
            }
        }

        debug!("Template cache miss for {}", raw);
        let template = Arc::from(PartialUriTemplate::new(raw).map_err(invalid_input)?);

        let mut cache = self.cache.lock().await;
        cache.insert(raw.to_owned(), template.clone());
        Ok(template)
    }

    /// Returns true if `raw` currently has a parsed template in the cache.
    #[cfg(test)]
    pub(crate) async fn is_cached(&self, raw: &str) -> bool {
        self.cache.lock().await.contains_key(raw)
    }
}
