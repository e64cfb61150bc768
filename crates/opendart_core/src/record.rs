//! The common trait over every decoded response record.

/// A decoded OpenDART record.
///
/// The verifier only ever inspects records through this trait: it needs a
/// type name for payload summaries and the receipt number for chaining the
/// search result into document downloads.
///
/// # Examples
///
/// ```
/// use opendart_core::{Disclosure, Record};
///
/// let disclosure = Disclosure {
///     corp_code: "00126380".to_string(),
///     corp_name: "삼성전자".to_string(),
///     rcept_no: Some("20240312000736".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(disclosure.type_name(), "Disclosure");
/// assert_eq!(disclosure.receipt_no(), Some("20240312000736"));
/// ```
pub trait Record: std::fmt::Debug + Send + Sync {
    /// Short type name used in payload summaries.
    fn type_name(&self) -> &'static str;

    /// Receipt number (`rcept_no`), when the record carries one.
    fn receipt_no(&self) -> Option<&str> {
        None
    }
}

/// Implements [`Record`] for a struct whose `rcept_no` field is a `String`.
macro_rules! receipt_record {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::Record for $ty {
                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }

                fn receipt_no(&self) -> Option<&str> {
                    Some(self.rcept_no.as_str()).filter(|no| !no.is_empty())
                }
            }
        )+
    };
}

pub(crate) use receipt_record;
