use pethub_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::{Any, TypeId};

#[derive(Debug)]
struct Greeter {
    greeting: &'static str,
}

impl FeatureSlice for Greeter {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Other;

impl FeatureSlice for Other {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn slice_is_keyed_by_concrete_type() {
    let slice = InitializedSlice::new(Greeter { greeting: "Hello Pets!" });

    assert_eq!(slice.id, TypeId::of::<Greeter>());
    assert_eq!(slice.downcast_ref::<Greeter>().map(|g| g.greeting), Some("Hello Pets!"));
    assert!(slice.downcast_ref::<Other>().is_none());
}
