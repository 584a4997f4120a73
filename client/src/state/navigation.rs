//! Visibility toggles for the public site's navigation entries.
//!
//! Toggles are local until "Update" is pressed; then every item is saved with
//! its own `PUT`, all in flight together, and the batch reports one notice.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::screen::ListStatus;
use super::toast::Notice;
use crate::net::api;
use crate::net::transport::{ApiError, ApiRequest};
use crate::net::types::NavItem;
use crate::resource::{EditMode, Resource};

#[derive(Clone, Debug, Default)]
pub struct NavigationState {
    pub items: Vec<NavItem>,
    pub status: ListStatus,
    pub saving: bool,
}

impl NavigationState {
    pub fn begin_load(&mut self) {
        self.status = ListStatus::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<NavItem>, ApiError>) -> Option<Notice> {
        match result {
            Ok(items) => {
                self.items = items;
                self.status = ListStatus::Loaded;
                None
            }
            Err(err) => {
                log::error!("failed to fetch navigation items: {err}");
                self.items.clear();
                self.status = ListStatus::Errored;
                Some(Notice::error("Failed to fetch navigation items"))
            }
        }
    }

    /// Flip the local visibility flag of one item.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.saving {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_active = !item.is_active;
                true
            }
            None => false,
        }
    }

    /// One `PUT {isActive}` per item. `None` while a save is in flight or
    /// when there is nothing to save.
    pub fn begin_save(&mut self, token: Option<&str>) -> Option<Result<Vec<ApiRequest>, Notice>> {
        if self.saving || self.items.is_empty() {
            return None;
        }
        let requests: Result<Vec<_>, _> = self
            .items
            .iter()
            .map(|item| api::submit_request::<NavItem>(&EditMode::Update { id: item.id.clone() }, &item.to_draft(), token))
            .collect();
        match requests {
            Ok(requests) => {
                self.saving = true;
                Some(Ok(requests))
            }
            Err(err) => {
                log::error!("failed to encode navigation update: {err}");
                Some(Err(Notice::error("Failed to update navigation items")))
            }
        }
    }

    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> Notice {
        self.saving = false;
        match result {
            Ok(()) => Notice::success("Navigation items updated successfully!"),
            Err(err) => {
                log::error!("failed to update navigation items: {err}");
                Notice::error("Failed to update navigation items")
            }
        }
    }
}
