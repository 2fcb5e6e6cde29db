//! Parameter Storage Types
//!
//! Key-value store for runtime tunable settings. Persistence belongs to
//! the host platform, which serializes through [`ParameterStore::iter`]
//! and restores by registering defaults and replaying saved values.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter cannot be modified through the host link
        const READ_ONLY = 0b00000001;
        /// A change only takes effect on the next boot
        const REBOOT_REQUIRED = 0b00000010;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

/// Parameter metadata
#[derive(Debug, Clone)]
pub struct ParamMetadata {
    /// Parameter flags
    pub flags: ParamFlags,
}

/// Parameter store for configuration management
///
/// Stores parameters as key-value pairs with metadata. The dirty flag
/// tells the host when unsaved changes exist.
pub struct ParameterStore {
    values: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
    metadata: FnvIndexMap<String<PARAM_NAME_LEN>, ParamMetadata, MAX_PARAMS>,
    dirty: bool,
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            values: FnvIndexMap::new(),
            metadata: FnvIndexMap::new(),
            dirty: false,
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = Self::key(name).ok()?;
        self.values.get(&key)
    }

    /// Set parameter value
    ///
    /// Only registered, writable parameters can be set. Marks the
    /// store as dirty.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = Self::key(name)?;

        if !self.values.contains_key(&key) {
            return Err(ParameterError::Unknown);
        }

        if let Some(meta) = self.metadata.get(&key) {
            if meta.flags.contains(ParamFlags::READ_ONLY) {
                return Err(ParameterError::ReadOnly);
            }
        }

        self.values.insert(key, value).ok();
        self.dirty = true;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists this is a no-op, so saved values
    /// replayed before registration survive.
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = Self::key(name)?;

        if self.values.contains_key(&key) {
            return Ok(());
        }

        self.values
            .insert(key.clone(), default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.metadata
            .insert(key, ParamMetadata { flags })
            .map_err(|_| ParameterError::StoreFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Get metadata for a parameter by name
    pub fn get_metadata(&self, name: &str) -> Option<&ParamMetadata> {
        let key = Self::key(name).ok()?;
        self.metadata.get(&key)
    }

    /// Iterate over all parameters as (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String<PARAM_NAME_LEN>, &ParamValue)> {
        self.values.iter()
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if store has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear dirty flag, called after a successful save
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
        let mut key = String::new();
        key.push_str(name)
            .map_err(|_| ParameterError::NameTooLong)?;
        Ok(key)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_store_new() {
        let store = ParameterStore::new();
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_parameter_store_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Int(42)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_parameter_store_set() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Float(1.5), ParamFlags::empty())
            .unwrap();
        store.set("TEST", ParamValue::Float(2.5)).unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Float(2.5)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_parameter_store_set_unknown() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set("UNKNOWN", ParamValue::Int(1)),
            Err(ParameterError::Unknown)
        );
    }

    #[test]
    fn test_parameter_store_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register(
                "A_NAME_LONGER_THAN_THE_LIMIT",
                ParamValue::Int(1),
                ParamFlags::empty()
            ),
            Err(ParameterError::NameTooLong)
        );
    }

    #[test]
    fn test_parameter_store_register_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        store.set("TEST", ParamValue::Int(100)).unwrap();
        // re-registration must not clobber the stored value
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Int(100)));
    }

    #[test]
    fn test_parameter_store_read_only() {
        let mut store = ParameterStore::new();
        store
            .register("LOCKED", ParamValue::Int(7), ParamFlags::READ_ONLY)
            .unwrap();
        assert_eq!(
            store.set("LOCKED", ParamValue::Int(8)),
            Err(ParameterError::ReadOnly)
        );
        assert_eq!(store.get("LOCKED"), Some(&ParamValue::Int(7)));
    }

    #[test]
    fn test_parameter_store_dirty_lifecycle() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert!(store.is_dirty());
        store.clear_dirty();
        assert!(!store.is_dirty());
        store.set("TEST", ParamValue::Int(100)).unwrap();
        assert!(store.is_dirty());
    }

    #[test]
    fn test_parameter_store_full() {
        extern crate std;
        use std::format;
        let mut store = ParameterStore::new();
        for i in 0..MAX_PARAMS {
            let name = format!("P{}", i);
            store
                .register(&name, ParamValue::Int(i as i32), ParamFlags::empty())
                .unwrap();
        }
        assert_eq!(
            store.register("ONE_MORE", ParamValue::Int(0), ParamFlags::empty()),
            Err(ParameterError::StoreFull)
        );
    }

    #[test]
    fn test_parameter_store_iter() {
        let mut store = ParameterStore::new();
        store
            .register("A", ParamValue::Int(1), ParamFlags::empty())
            .unwrap();
        store
            .register("B", ParamValue::Bool(true), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.iter().count(), 2);
    }

    #[test]
    fn test_param_value_equality() {
        assert_eq!(ParamValue::Float(1.0), ParamValue::Float(1.0));
        assert_ne!(ParamValue::Int(1), ParamValue::Int(2));
        assert_ne!(ParamValue::Int(1), ParamValue::Float(1.0));
        assert_ne!(ParamValue::Bool(true), ParamValue::Bool(false));
    }
}
