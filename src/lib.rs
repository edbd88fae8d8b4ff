//! Page - a tiny age-encrypted password store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Generate keypair and store directory
//! │   ├── ls            # List entries
//! │   ├── open          # Decrypt to clipboard or stdout
//! │   ├── edit          # Create/edit an entry in $EDITOR
//! │   ├── gen           # Generate a random secret
//! │   ├── rm            # Remove an entry
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # Envelope codec
//!     │   ├── mod       # Cipher trait
//!     │   └── age       # age + ASCII armor implementation
//!     ├── config        # Path and editor resolution
//!     ├── keys          # Keypair generation and loading
//!     ├── store         # One encrypted file per entry
//!     └── validation    # Entry name checks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use page::core::keys::Keypair;
//! use page::core::store::Store;
//!
//! # fn main() -> page::error::Result<()> {
//! let store = Store::new("/tmp/secrets").with_keypair(Keypair::generate());
//! store.init()?;
//! store.write("example.com", b"user\npass123\n")?;
//! assert_eq!(store.read("example.com")?.as_slice(), b"user\npass123\n");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
