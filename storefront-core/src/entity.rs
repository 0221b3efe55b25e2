use std::rc::Rc;
use std::sync::Arc;

/// Anything that can be kept in a keyed store.
///
/// The id is assigned by the caller when the entity is built and never
/// changes afterwards.
pub trait Entity {
    fn id(&self) -> &str;
}

impl<T: Entity + ?Sized> Entity for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Entity + ?Sized> Entity for Rc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Entity + ?Sized> Entity for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tag(&'static str);

    impl Entity for Tag {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_smart_pointers_forward_id() {
        let shared: Arc<dyn Entity> = Arc::new(Tag("t1"));
        assert_eq!(shared.id(), "t1");

        let boxed: Box<Tag> = Box::new(Tag("t2"));
        assert_eq!(boxed.id(), "t2");
    }
}
