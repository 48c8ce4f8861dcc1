use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_template_renders_with_its_arity() {
    let filler: [&dyn fmt::Display; 3] = [&"a", &"b", &"c"];
    for resource in Resource::ALL {
        let args = &filler[..resource.arity()];
        let rendered = resource.render(args);
        assert!(
            !rendered.contains("{0}"),
            "{resource:?} left a placeholder: {rendered}"
        );
    }
}

#[test]
fn arity_counts_distinct_placeholders() {
    assert_eq!(Resource::ArgumentNull.arity(), 0);
    assert_eq!(Resource::EmptyString.arity(), 1);
    assert_eq!(Resource::StructIsDefault.arity(), 2);
    assert_eq!(Resource::NotEnum.arity(), 3);
}

#[test]
fn empty_string_message_names_the_parameter() {
    assert_eq!(
        Resource::EmptyString.render(&[&"name"]),
        "'name' cannot be an empty string (\"\") or start with the null character."
    );
}

#[test]
fn short_argument_list_falls_back_to_template() {
    assert_eq!(
        Resource::ServiceMissing.render(&[]),
        "Cannot find an instance of the {0} service."
    );
}

#[test]
fn recoverable_error_default() {
    assert_eq!(
        Resource::RecoverableError.template(),
        "A recoverable error has been detected."
    );
}
