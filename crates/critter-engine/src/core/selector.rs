//! Resource selector — picks one resource uniformly at random from a
//! category's registered entries.

use crate::api::types::Resource;
use crate::core::rng::Rng;
use crate::host::traits::ResourceStore;

/// Pick a random image registered under `category`.
/// Returns None when the category has no images; callers treat that as
/// "draw nothing", not as an error.
pub fn pick_image<'a>(
    store: &'a dyn ResourceStore,
    category: &str,
    rng: &mut Rng,
) -> Option<&'a Resource> {
    pick(store.images(category), rng)
}

/// Pick a random sound registered under `category`.
pub fn pick_sound<'a>(
    store: &'a dyn ResourceStore,
    category: &str,
    rng: &mut Rng,
) -> Option<&'a Resource> {
    pick(store.sounds(category), rng)
}

fn pick<'a>(pool: &'a [Resource], rng: &mut Rng) -> Option<&'a Resource> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.next_int(pool.len() as u32) as usize)
}
