//! Process-wide interning of shapes built at runtime.

use std::collections::HashMap;
use std::sync::OnceLock;

use alloc::boxed::Box;
use alloc::format;

use parking_lot::RwLock;

use crate::Shape;

/// Pointer shapes keyed by their pointee's type identifier.
static POINTER_SHAPES: OnceLock<RwLock<HashMap<&'static str, &'static Shape>>> = OnceLock::new();

fn pointer_shapes() -> &'static RwLock<HashMap<&'static str, &'static Shape>> {
    POINTER_SHAPES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the interned pointer shape for `pointee`, leaking it on first use.
pub(crate) fn pointer_to(pointee: &'static Shape) -> &'static Shape {
    let cached = pointer_shapes().read().get(pointee.type_identifier).copied();
    if let Some(shape) = cached {
        return shape;
    }

    // another thread may have interned it between the two locks
    *pointer_shapes()
        .write()
        .entry(pointee.type_identifier)
        .or_insert_with(|| {
            let type_identifier: &'static str =
                Box::leak(format!("*{}", pointee.type_identifier).into_boxed_str());
            Box::leak(Box::new(Shape::pointer(type_identifier, pointee)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes;

    #[test]
    fn concurrent_interning_yields_one_shape() {
        let interned: alloc::vec::Vec<&'static Shape> = std::thread::scope(|scope| {
            let handles: alloc::vec::Vec<_> = (0..8)
                .map(|_| scope.spawn(|| pointer_to(&shapes::COMPLEX128)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });
        assert!(interned.iter().all(|shape| core::ptr::eq(*shape, interned[0])));
        assert_eq!(interned[0].type_identifier, "*complex128");
    }
}
