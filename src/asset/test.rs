use std::path::{Path, PathBuf};

use crate::{
    asset::{FileResolver, OutputResolver, Root, TraversalPolicy},
    config::ResolverConfig,
    ErrorKind,
};

#[test]
fn default_root_is_outputs() {
    assert_eq!(Root::default().path(), Path::new("core/outputs"));
    assert_eq!(Root::outputs(), Root::outputs());
}

#[test]
fn resolve_joins_root() {
    let resolver = OutputResolver::default();
    assert_eq!(
        resolver.resolve("Collada/duck.g3dj").unwrap(),
        PathBuf::from("core/outputs/Collada/duck.g3dj")
    );
}

#[test]
fn resolve_empty_is_root() {
    let resolver = OutputResolver::new(Root::new("assets"));
    assert_eq!(resolver.resolve("").unwrap(), PathBuf::from("assets"));
}

#[test]
fn resolve_through_trait_object() {
    let resolver = OutputResolver::new(Root::new("assets"));
    let dynamic: &dyn FileResolver = &resolver;
    assert_eq!(
        dynamic.resolve("box.g3dj").unwrap(),
        PathBuf::from("assets/box.g3dj")
    );
}

#[test]
fn rejects_traversal() {
    let resolver = OutputResolver::default();
    for name in ["../secret", "models/../../secret", "/etc/passwd"] {
        let error = resolver.resolve(name).unwrap_err();
        assert!(
            matches!(&error.kind, ErrorKind::Traversal(rejected) if rejected == name),
            "{name}: {error}"
        );
    }
}

#[test]
fn current_dir_components_are_not_traversal() {
    let resolver = OutputResolver::default();
    assert!(resolver.resolve("./duck.g3dj").is_ok());
}

#[test]
fn allow_policy_joins_verbatim() {
    let resolver = OutputResolver::new(Root::new("assets")).with_traversal(TraversalPolicy::Allow);
    assert_eq!(
        resolver.resolve("../secret").unwrap(),
        Path::new("assets").join("../secret")
    );
}

#[test]
fn from_config() {
    let config = ResolverConfig {
        root: Root::new("models"),
        traversal: TraversalPolicy::Allow,
        startup_listing: None,
    };
    let resolver = OutputResolver::from_config(&config);
    assert_eq!(resolver.root(), &Root::new("models"));
    assert_eq!(resolver.traversal(), TraversalPolicy::Allow);
}

#[test]
fn resolver_is_send_and_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<OutputResolver>();
}
