//! Decoded operation results.

use opendart_core::Record;

/// What an operation returned.
#[derive(Debug)]
pub enum Payload {
    /// A list of records, possibly empty
    Records(Vec<Box<dyn Record>>),
    /// A single record
    Record(Box<dyn Record>),
    /// A downloaded file
    Bytes(Vec<u8>),
    /// Nothing
    Empty,
}

impl Payload {
    /// Box a typed record list.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_core::Disclosure;
    /// use opendart_interface::Payload;
    ///
    /// let payload = Payload::records(vec![Disclosure::default()]);
    /// assert!(!payload.is_empty());
    /// assert!(Payload::records(Vec::<Disclosure>::new()).is_empty());
    /// ```
    pub fn records<T>(items: Vec<T>) -> Self
    where
        T: Record + 'static,
    {
        Self::Records(
            items
                .into_iter()
                .map(|item| Box::new(item) as Box<dyn Record>)
                .collect(),
        )
    }

    /// Box a single record.
    pub fn record<T>(item: T) -> Self
    where
        T: Record + 'static,
    {
        Self::Record(Box::new(item))
    }

    /// True for an empty list, empty bytes or no value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Records(items) => items.is_empty(),
            Self::Record(_) => false,
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::Empty => true,
        }
    }

    /// Receipt number of the first listed record, if any.
    pub fn first_receipt_no(&self) -> Option<&str> {
        match self {
            Self::Records(items) => items.first().and_then(|item| item.receipt_no()),
            _ => None,
        }
    }
}
