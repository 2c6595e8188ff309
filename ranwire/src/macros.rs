/// Declare an open "enum" as a newtype over an integer, so that values
/// outside the named set survive a parse and can be reported.
macro_rules! enum_sim {
    (
        $(#[$enum_attr: meta])*
        pub struct $tname:ident ($size_t:ty) {
            $(
                $(#[$arm_attr: meta])*
                $enum_arm:ident = $num_exp:expr
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
        $(#[$enum_attr])*
        pub struct $tname($size_t);

        impl $tname {
            $(
                $(#[$arm_attr])*
                pub const $enum_arm: Self = Self($num_exp);
            )+

            /// Get the raw value.
            #[inline]
            pub const fn raw(&self) -> $size_t {
                self.0
            }

            /// Name of the constant matching this value, if there is one.
            pub fn name(&self) -> Option<&'static str> {
                match *self {
                    $(Self::$enum_arm => Some(stringify!($enum_arm)),)+
                    _ => None,
                }
            }
        }

        impl ::core::convert::From<$size_t> for $tname {
            #[inline]
            fn from(value: $size_t) -> $tname {
                $tname(value)
            }
        }

        impl ::core::convert::From<$tname> for $size_t {
            #[inline]
            fn from(value: $tname) -> $size_t {
                value.0
            }
        }

        impl ::core::fmt::Display for $tname {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}(0x{:x})", name, self.0),
                    None => write!(f, "0x{:x}", self.0),
                }
            }
        }
    };
}

/// Generate a pair of slicing helpers for each fixed-offset header field.
macro_rules! header_field_range_accessors {
    ($(($name:ident, $name_mut:ident, $range:expr)),+ $(,)?) => {
        $(
            #[inline]
            fn $name(buf: &[u8]) -> &[u8] {
                &buf[$range]
            }

            #[inline]
            fn $name_mut(buf: &mut [u8]) -> &mut [u8] {
                &mut buf[$range]
            }
        )+
    };
}
