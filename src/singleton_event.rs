/// Events emitted by a singleton slot during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use lazy_singleton::SingletonEvent;
///
/// let event = SingletonEvent::Initialize { type_name: "i32" };
/// println!("{:?}", event);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonEvent {
    /// The caller won the creation race and constructed the value.
    Initialize {
        /// The type name of the constructed value (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// The caller received the already constructed value.
    Reuse {
        /// The type name of the shared value
        type_name: &'static str,
        /// Whether the value was only found on the re-check under the init lock
        contended: bool,
    },

    /// A read without initialization was performed.
    Get {
        /// The type name that was requested
        type_name: &'static str,
        /// Whether the slot was occupied
        found: bool,
    },

    /// An eager initialization was refused because the slot was occupied.
    Rejected {
        /// The type name of the refused value
        type_name: &'static str,
    },
}

impl std::fmt::Display for SingletonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SingletonEvent::Initialize { type_name } => {
                write!(f, "initialize {{ type_name: {} }}", type_name)
            }
            SingletonEvent::Reuse {
                type_name,
                contended,
            } => {
                write!(
                    f,
                    "reuse {{ type_name: {}, contended: {} }}",
                    type_name, contended
                )
            }
            SingletonEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {}, found: {} }}", type_name, found)
            }
            SingletonEvent::Rejected { type_name } => {
                write!(f, "rejected {{ type_name: {} }}", type_name)
            }
        }
    }
}
