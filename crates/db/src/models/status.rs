//! Status helper enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Category lifecycle status.
    ///
    /// `Retired` replaces hard deletion for categories that still own
    /// templates: they stay valid foreign-key targets but drop out of the
    /// active listing.
    CategoryStatus {
        Active = 1,
        Retired = 2,
    }
}

impl CategoryStatus {
    /// Map the wire-level `is_active` flag onto a lifecycle status.
    pub fn from_active(is_active: bool) -> Self {
        if is_active {
            Self::Active
        } else {
            Self::Retired
        }
    }
}
