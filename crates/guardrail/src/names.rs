//! Type names for failure messages.

/// Single-argument wrappers trimmed from service type names.
const SERVICE_WRAPPERS: [&str; 3] = ["alloc::sync::Arc<", "alloc::rc::Rc<", "alloc::boxed::Box<"];

/// Name of the service a component slot holds, without a smart-pointer wrapper.
pub(crate) fn service_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    SERVICE_WRAPPERS
        .iter()
        .find_map(|wrapper| name.strip_prefix(wrapper)?.strip_suffix('>'))
        .unwrap_or(name)
}

/// Last path segment of a type name, ignoring generic arguments.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::sync::Arc;

    trait Logger {}

    #[test]
    fn service_name_trims_smart_pointers() {
        assert_eq!(service_type_name::<Arc<String>>(), "alloc::string::String");
        assert_eq!(service_type_name::<Rc<u8>>(), "u8");
        assert_eq!(service_type_name::<Box<u16>>(), "u16");
        assert!(service_type_name::<Arc<dyn Logger>>().ends_with("Logger"));
    }

    #[test]
    fn service_name_keeps_plain_types() {
        assert_eq!(service_type_name::<u32>(), "u32");
        assert_eq!(
            service_type_name::<Vec<u8>>(),
            "alloc::vec::Vec<u8>"
        );
    }

    #[test]
    fn short_name_drops_path_and_generics() {
        assert_eq!(short_type_name("app::model::Color"), "Color");
        assert_eq!(short_type_name("alloc::vec::Vec<app::Item>"), "Vec");
        assert_eq!(short_type_name("u8"), "u8");
    }
}
