//! The user directory.
//!
//! Owns every known [`User`], keyed by username. A `BTreeMap` keeps report
//! iteration deterministic (alphabetical by username).
//!
//! The friendship relation is directed: `add_friend(a, b)` records `b` in
//! `a`'s friend set and nothing else. Removing a user does *not* purge the
//! removed name from other users' friend sets; readers are expected to
//! tolerate stale friend references.

use crate::error::{Result, StoreError};
use crate::types::{is_valid_age, is_valid_name, User};
use std::collections::BTreeMap;

/// Owning store for users, keyed by username.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: BTreeMap<String, User>,
}

impl Directory {
    /// Creates a new, empty directory.
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
        }
    }

    /// Adds a user with the given username and age.
    pub fn add_user(&mut self, username: &str, age: i32) -> Result<()> {
        if !is_valid_name(username) {
            return Err(StoreError::InvalidName {
                name: username.to_string(),
            });
        }
        if !is_valid_age(age) {
            return Err(StoreError::IllegalAge { age });
        }
        if self.users.contains_key(username) {
            return Err(StoreError::AlreadyExists {
                kind: "user",
                name: username.to_string(),
            });
        }
        self.users
            .insert(username.to_string(), User::new(username, age));
        Ok(())
    }

    /// Removes a user. Friend references to the removed name are left in
    /// place in other users' friend sets.
    pub fn remove_user(&mut self, username: &str) -> Result<()> {
        self.users
            .remove(username)
            .map(|_| ())
            .ok_or_else(|| StoreError::UserNotFound {
                username: username.to_string(),
            })
    }

    /// Records `friend` in `username`'s friend set. Directed: `friend`'s own
    /// friend set is untouched. Both users must exist.
    pub fn add_friend(&mut self, username: &str, friend: &str) -> Result<()> {
        if !self.users.contains_key(friend) {
            return Err(StoreError::UserNotFound {
                username: friend.to_string(),
            });
        }
        let user = self.user_mut(username)?;
        user.friends.insert(friend.to_string());
        Ok(())
    }

    /// Removes `friend` from `username`'s friend set only.
    pub fn remove_friend(&mut self, username: &str, friend: &str) -> Result<()> {
        let user = self.user_mut(username)?;
        user.friends.remove(friend);
        Ok(())
    }

    /// Adds a series name to `username`'s favorites. The caller is
    /// responsible for checking the name against the catalog first.
    pub fn add_favorite(&mut self, username: &str, series: &str) -> Result<()> {
        let user = self.user_mut(username)?;
        user.favorites.insert(series.to_string());
        Ok(())
    }

    /// Removes a series name from `username`'s favorites.
    pub fn remove_favorite(&mut self, username: &str, series: &str) -> Result<()> {
        let user = self.user_mut(username)?;
        user.favorites.remove(series);
        Ok(())
    }

    /// Removes a series name from every user's favorites. Called when a
    /// series leaves the catalog, so favorites never dangle.
    pub fn drop_series(&mut self, series: &str) {
        for user in self.users.values_mut() {
            user.favorites.remove(series);
        }
    }

    /// Looks up a user by name.
    pub fn lookup(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Iterate every user, alphabetically by username.
    pub fn all(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Number of users in the directory.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut User> {
        self.users
            .get_mut(username)
            .ok_or_else(|| StoreError::UserNotFound {
                username: username.to_string(),
            })
    }
}
