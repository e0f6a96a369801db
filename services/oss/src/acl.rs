use ossign_core::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Access level of a bucket, sent in the `x-oss-acl` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acl {
    /// Anyone can read and write objects.
    PublicReadWrite,
    /// Anyone can read objects, only the owner can write.
    PublicRead,
    /// Only the owner can read and write.
    Private,
}

impl Acl {
    /// The token used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Acl::PublicReadWrite => "public-read-write",
            Acl::PublicRead => "public-read",
            Acl::Private => "private",
        }
    }
}

impl Display for Acl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Acl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public-read-write" => Ok(Acl::PublicReadWrite),
            "public-read" => Ok(Acl::PublicRead),
            "private" => Ok(Acl::Private),
            v => Err(Error::request_invalid(format!("unknown bucket acl: {v}"))),
        }
    }
}
