use strum_macros::{Display, EnumString};

/// How XML attributes are folded into (and read back out of) a node.
///
/// | policy    | `<life max="150">50</life>` decodes to         |
/// |-----------|-------------------------------------------------|
/// | `None`    | `50`                                            |
/// | `Merge`   | `{value: 50, max: 150}`                         |
/// | `Group`   | `{value: 50, attributes: {max: 150}}`           |
/// | `Attribs` | `{max: 150}`                                    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum XmlPolicy {
    None,
    Merge,
    #[default]
    Group,
    Attribs,
}
