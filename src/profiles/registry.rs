use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::error::{Error, Result};

use super::builtin::{self, BUILTIN_PROFILES};
use super::models::{Overrides, PrintOptions, ProfileInfo};

#[derive(Debug, Default)]
struct Profiles {
    by_name: HashMap<String, PrintOptions>,
    id_to_name: BTreeMap<u32, String>,
    name_to_id: HashMap<String, u32>,
}

impl Profiles {
    fn bind_id(&mut self, name: &str, id: u32) {
        if let Some(previous_name) = self.id_to_name.insert(id, name.to_string()) {
            if previous_name != name {
                self.name_to_id.remove(&previous_name);
            }
        }
        if let Some(previous_id) = self.name_to_id.insert(name.to_string(), id) {
            if previous_id != id {
                self.id_to_name.remove(&previous_id);
            }
        }
    }
}

/// Catalog of named print profiles.
///
/// Built once at startup and shared by reference. Names and numeric ids are
/// kept in bijection under a single lock so readers never observe one map
/// updated without the other.
#[derive(Debug)]
pub struct ProfileRegistry {
    inner: RwLock<Profiles>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRegistry {
    /// Registry seeded with the built-in profiles (ids `0..BUILTIN_PROFILES.len()`).
    pub fn new() -> Self {
        let mut profiles = Profiles::default();
        for profile in BUILTIN_PROFILES {
            profiles.by_name.insert(profile.name.to_string(), profile.options());
            profiles.bind_id(profile.name, profile.id);
        }
        ProfileRegistry { inner: RwLock::new(profiles) }
    }

    /// Registry without any profiles.
    pub fn empty() -> Self {
        ProfileRegistry { inner: RwLock::new(Profiles::default()) }
    }

    fn read(&self) -> RwLockReadGuard<'_, Profiles> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Profiles> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a profile by numeric id or by name.
    ///
    /// Anything that parses as a non-negative integer is treated as an id.
    /// An empty identifier selects the `default` profile.
    pub fn resolve(&self, identifier: &str) -> Result<PrintOptions> {
        let identifier = identifier.trim();
        let name = if identifier.is_empty() { builtin::DEFAULT } else { identifier };

        let profiles = self.read();
        let options = match name.parse::<u32>() {
            Ok(id) => profiles
                .id_to_name
                .get(&id)
                .and_then(|name| profiles.by_name.get(name)),
            Err(_) => profiles.by_name.get(name),
        };

        options.cloned().ok_or_else(|| Error::UnknownProfile { identifier: identifier.to_string() })
    }

    pub fn resolve_with_overrides(&self, identifier: &str, overrides: &Overrides) -> Result<PrintOptions> {
        let options = self.resolve(identifier)?;
        if overrides.is_empty() {
            return Ok(options);
        }
        debug!("Applying overrides {overrides:?} to profile '{identifier}'");
        overrides.apply_to(options)
    }

    /// Insert or replace a profile by name. Existing id bindings are untouched,
    /// so a re-registered built-in stays reachable under its old id.
    pub fn register(&self, name: &str, options: PrintOptions) {
        if builtin::is_builtin(name) {
            warn!("Profile '{name}' shadows a built-in profile");
        }
        self.write().by_name.insert(name.to_string(), options);
    }

    /// Insert or replace a profile and bind it to `id`, releasing whatever
    /// name held that id before and whatever id this name held before.
    pub fn register_with_id(&self, name: &str, id: u32, options: PrintOptions) {
        if builtin::is_builtin(name) {
            warn!("Profile '{name}' shadows a built-in profile");
        }
        let mut profiles = self.write();
        profiles.by_name.insert(name.to_string(), options);
        profiles.bind_id(name, id);
    }

    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.read().name_to_id.get(name).copied()
    }

    pub fn name_of(&self, id: u32) -> Option<String> {
        self.read().id_to_name.get(&id).cloned()
    }

    pub fn describe(&self, identifier: &str) -> String {
        self.resolve(identifier)
            .map(|options| options.description())
            .unwrap_or_else(|_| "Unknown profile".to_string())
    }

    /// Every profile: those with an id first in id order, then id-less ones by name.
    pub fn list(&self) -> Vec<ProfileInfo> {
        let profiles = self.read();
        let info = |id: Option<u32>, name: &str, options: &PrintOptions| ProfileInfo {
            id,
            name: name.to_string(),
            options: options.clone(),
            description: options.description(),
        };

        let mut listing: Vec<ProfileInfo> = profiles
            .id_to_name
            .iter()
            .filter_map(|(id, name)| profiles.by_name.get(name).map(|options| info(Some(*id), name, options)))
            .collect();

        let mut unnumbered: Vec<(&String, &PrintOptions)> = profiles
            .by_name
            .iter()
            .filter(|(name, _)| !profiles.name_to_id.contains_key(*name))
            .collect();
        unnumbered.sort_by(|a, b| a.0.cmp(b.0));
        listing.extend(unnumbered.into_iter().map(|(name, options)| info(None, name, options)));

        listing
    }
}
