//! Record Source: the stats API client that supplies record sets.

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::types::{Franchise, PlayerIdResponse, PlayerNameResponse, RecordSet};
use crate::{
    cli::{
        types::{FranchiseId, PlayerId, StatKind, Year},
        SourceArgs,
    },
    core::{
        cache::{
            CacheKey, CacheManager, FranchisesCacheKey, PlayerLookupCacheKey,
            PlayerStatsCacheKey, TeamStatsCacheKey, UnifiedCache, GLOBAL_CACHE,
        },
        http::{build_client, resolve_api_url},
    },
    error::{BbError, Result},
};


/// Anything that can supply franchises and statistics tables.
///
/// The view engine only ever sees the [`RecordSet`]s this returns.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch_franchises(&self) -> Result<Vec<Franchise>>;

    /// Team batting or pitching lines, optionally bounded by season.
    async fn fetch_team_stats(
        &self,
        kind: StatKind,
        team: &FranchiseId,
        start_year: Option<Year>,
        end_year: Option<Year>,
    ) -> Result<RecordSet>;

    /// Season-by-season lines for one player.
    async fn fetch_player_stats(&self, kind: StatKind, player: &PlayerId) -> Result<RecordSet>;

    async fn resolve_player_name(&self, player: &PlayerId) -> Result<String>;

    async fn resolve_player_id(&self, name: &str) -> Result<PlayerId>;
}

/// [`RecordSource`] backed by the stats HTTP API.
pub struct HttpRecordSource {
    client: Client,
    base_url: String,
    cache: Option<&'static CacheManager>,
    refresh: bool,
}

impl HttpRecordSource {
    /// Uncached source for `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
            cache: None,
            refresh: false,
        })
    }

    /// Source configured from the command line, using the global cache.
    pub fn from_args(args: &SourceArgs) -> Result<Self> {
        let base_url = resolve_api_url(args.api_url.clone())?;
        Ok(Self::new(base_url)?
            .with_cache(&GLOBAL_CACHE)
            .with_refresh(args.refresh))
    }

    pub fn with_cache(mut self, cache: &'static CacheManager) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Skip cache reads; responses are still written back.
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// `base_url` plus percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let invalid = |message: String| BbError::InvalidApiUrl {
            url: self.base_url.clone(),
            message,
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Value> {
        let url = self.endpoint(segments)?;
        debug!(%url, ?query, "GET");

        let res = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    /// Serve from `cache` unless refreshing. A refresh drops the stored entry
    /// before fetching, so a failed request does not leave stale data behind.
    async fn cached_json<K: CacheKey>(
        &self,
        cache: Option<&UnifiedCache<K, Value>>,
        key: K,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Value> {
        if let Some(cache) = cache {
            if self.refresh {
                cache.invalidate(&key);
            } else if let Some(hit) = cache.get(&key) {
                debug!(key = %key.to_file_key(), "cache hit");
                return Ok(hit);
            }
        }

        let value = self.get_json(segments, query).await?;
        if let Some(cache) = cache {
            cache.put(key, value.clone());
            let (entries, capacity) = cache.memory_stats();
            debug!(entries, capacity, "cached response");
        }
        Ok(value)
    }
}

/// `start_year` / `end_year` query pairs, only for the bounds that are set.
pub fn year_query(start_year: Option<Year>, end_year: Option<Year>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(y) = start_year {
        query.push(("start_year", y.to_string()));
    }
    if let Some(y) = end_year {
        query.push(("end_year", y.to_string()));
    }
    query
}

impl RecordSource for HttpRecordSource {
    async fn fetch_franchises(&self) -> Result<Vec<Franchise>> {
        let value = self
            .cached_json(
                self.cache.map(|c| &c.franchises),
                FranchisesCacheKey,
                &["franchises"],
                &[],
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn fetch_team_stats(
        &self,
        kind: StatKind,
        team: &FranchiseId,
        start_year: Option<Year>,
        end_year: Option<Year>,
    ) -> Result<RecordSet> {
        let endpoint = format!("team{}", kind.endpoint_suffix());
        let key = TeamStatsCacheKey {
            kind,
            team: team.clone(),
            start_year,
            end_year,
        };
        let value = self
            .cached_json(
                self.cache.map(|c| &c.team_stats),
                key,
                &[endpoint.as_str(), team.as_str()],
                &year_query(start_year, end_year),
            )
            .await?;
        Ok(RecordSet::from_json(value)?)
    }

    async fn fetch_player_stats(&self, kind: StatKind, player: &PlayerId) -> Result<RecordSet> {
        let endpoint = format!("player{}", kind.endpoint_suffix());
        let key = PlayerStatsCacheKey {
            kind,
            player: player.clone(),
        };
        let value = self
            .cached_json(
                self.cache.map(|c| &c.player_stats),
                key,
                &[endpoint.as_str(), player.as_str()],
                &[],
            )
            .await?;
        Ok(RecordSet::from_json(value)?)
    }

    async fn resolve_player_name(&self, player: &PlayerId) -> Result<String> {
        let value = self
            .cached_json(
                self.cache.map(|c| &c.player_lookup),
                PlayerLookupCacheKey::NameOf(player.clone()),
                &["playername", player.as_str()],
                &[],
            )
            .await?;
        let res: PlayerNameResponse = serde_json::from_value(value)?;
        Ok(res.name)
    }

    async fn resolve_player_id(&self, name: &str) -> Result<PlayerId> {
        let value = self
            .cached_json(
                self.cache.map(|c| &c.player_lookup),
                PlayerLookupCacheKey::IdOf(name.to_string()),
                &["playerid", name],
                &[],
            )
            .await?;
        let res: PlayerIdResponse = serde_json::from_value(value)?;
        Ok(res.id)
    }
}
