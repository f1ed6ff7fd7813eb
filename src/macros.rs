/// Builds an [`Attributes`](crate::Attributes) map where every value is present.
///
/// # Examples
///
/// ```
/// use xmlrender::{attrs, Element};
///
/// let img = Element::new("img").with_attributes(attrs! { "src" => "a.png", "width" => 0 });
/// assert_eq!(img.to_string(), r#"<img src="a.png" width="0"/>"#);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };

    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Attributes::from_iter([
            $((::std::string::String::from($name), ::std::option::Option::Some(::std::string::ToString::to_string(&$value))),)+
        ])
    };
}
