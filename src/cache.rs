//! In-memory caching using moka
//!
//! Confirmed bookings are display-only snapshots. They are kept here for a
//! limited time so the planner can show them again, and are never persisted.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::pricing::BookingConfirmation;

/// Application cache holding transient booking confirmations
#[derive(Clone)]
pub struct AppCache {
    /// Confirmations (booking id -> snapshot)
    pub bookings: Cache<Uuid, Arc<BookingConfirmation>>,
}

impl AppCache {
    /// Create a cache whose confirmations expire after `booking_ttl`
    pub fn new(booking_ttl: Duration) -> Self {
        Self {
            // Bookings: 1000 entries, TTL from config, no refresh on read
            bookings: Cache::builder()
                .max_capacity(1000)
                .time_to_live(booking_ttl)
                .build(),
        }
    }

    /// Store a confirmation and return the shared handle
    pub async fn remember_booking(
        &self,
        confirmation: BookingConfirmation,
    ) -> Arc<BookingConfirmation> {
        let confirmation = Arc::new(confirmation);
        self.bookings
            .insert(confirmation.id, confirmation.clone())
            .await;
        confirmation
    }

    pub async fn booking(&self, id: &Uuid) -> Option<Arc<BookingConfirmation>> {
        self.bookings.get(id).await
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            bookings_size: self.bookings.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.bookings.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(30 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub bookings_size: u64,
}
