use super::{DescriptorError, MethodSignature};
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};

/// Static, read-only description of a service contract.
///
/// Constructed once when the service is registered with the runtime and
/// borrowed read-only by the adapter on every call. Methods keep their
/// declaration order.
#[derive(Debug)]
pub struct ServiceDescriptor {
    interface_id: String,
    configured_path: Option<String>,
    methods: Vec<MethodSignature>,

    /// (lowercased name, arity) -> declaration index. Built lazily, at most
    /// once; never invalidated, because the descriptor is immutable.
    index: OnceCell<HashMap<(String, usize), usize>>,
}

impl ServiceDescriptor {
    /// Registers a service contract.
    ///
    /// Rejects any pair of methods sharing a case-insensitive name and arity
    /// with [`DescriptorError::AmbiguousSignature`]; an untyped caller has no
    /// way to address one of them over the other.
    pub fn new(
        interface_id: impl Into<String>,
        configured_path: Option<String>,
        methods: Vec<MethodSignature>,
    ) -> Result<Self, DescriptorError> {
        let mut seen: HashSet<(String, usize)> = HashSet::new();
        for method in &methods {
            if !seen.insert((method.name.to_lowercase(), method.arity())) {
                return Err(DescriptorError::AmbiguousSignature {
                    method: method.name.clone(),
                    arity: method.arity(),
                });
            }
        }

        Ok(Self {
            interface_id: interface_id.into(),
            configured_path,
            methods,
            index: OnceCell::new(),
        })
    }

    /// Fully-qualified identity of the service interface.
    pub fn interface_id(&self) -> &str {
        &self.interface_id
    }

    /// Explicitly configured routing path, if any.
    pub fn configured_path(&self) -> Option<&str> {
        self.configured_path.as_deref()
    }

    /// Declared method signatures, in declaration order.
    pub fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    /// First-declared signature matching `method_name` case-insensitively
    /// with exactly `arity` parameters.
    pub(crate) fn lookup(&self, method_name: &str, arity: usize) -> Option<&MethodSignature> {
        let index = self.index.get_or_init(|| {
            let mut map = HashMap::new();
            for (i, method) in self.methods.iter().enumerate() {
                // entry() preserves first-declared-wins ordering
                map.entry((method.name.to_lowercase(), method.arity()))
                    .or_insert(i);
            }
            map
        });

        index
            .get(&(method_name.to_lowercase(), arity))
            .map(|&i| &self.methods[i])
    }
}
