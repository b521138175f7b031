//! The one pattern every management page shares: fetch a collection,
//! hold it, refetch when a filter parameter changes or on explicit
//! refresh, and never apply a response that a newer fetch (or an
//! unmount) has superseded.

use futures::future::LocalBoxFuture;
use shared::models::ApiError;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Handle returned by [`use_remote_list`].
pub struct RemoteList<T: 'static> {
    /// The fetched collection. Pages may patch it locally after a
    /// confirmed mutation (e.g. removing a deleted post without a
    /// refetch).
    pub items: UseStateHandle<Vec<T>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    tick: UseStateHandle<u32>,
}

impl<T> RemoteList<T> {
    /// Whether a fetch is currently in flight.
    pub fn loading(&self) -> bool {
        *self.loading
    }

    /// The last read failure, cleared on the next fetch.
    pub fn error(&self) -> Option<String> {
        (*self.error).clone()
    }

    /// Trigger a refetch with the current dependency value.
    pub fn refresh(&self) {
        self.tick.set(self.tick.wrapping_add(1));
    }
}

impl<T> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            loading: self.loading.clone(),
            error: self.error.clone(),
            tick: self.tick.clone(),
        }
    }
}

/// Fetches a remote collection and keeps it in view state.
///
/// Refetches whenever `dep` changes (city selection, status filter) and
/// on [`RemoteList::refresh`]. Each fetch invocation gets a generation
/// number; a response whose generation is no longer current is discarded,
/// so a slow response can neither clobber a newer one nor update a view
/// that has unmounted.
#[hook]
pub fn use_remote_list<T, D, F>(dep: D, fetch: F) -> RemoteList<T>
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> LocalBoxFuture<'static, Result<Vec<T>, ApiError>> + 'static,
{
    let items = use_state(Vec::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let tick = use_state(|| 0u32);
    let generation = use_mut_ref(|| 0u64);

    {
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();
        let fetch = Rc::new(fetch);
        use_effect_with((dep, *tick), move |(dep, _)| {
            *generation.borrow_mut() += 1;
            let current = *generation.borrow();

            loading.set(true);
            error.set(None);

            let dep = dep.clone();
            let fetch = fetch.clone();
            let generation_in_flight = generation.clone();
            spawn_local(async move {
                let result = fetch(dep).await;
                if *generation_in_flight.borrow() != current {
                    // Superseded by a newer fetch or an unmount.
                    return;
                }
                match result {
                    Ok(list) => items.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });

            move || {
                *generation.borrow_mut() += 1;
            }
        });
    }

    RemoteList {
        items,
        loading,
        error,
        tick,
    }
}
