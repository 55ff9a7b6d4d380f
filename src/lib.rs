//! Classic container structures on an amortized grow/decay vector.
//!
//! Five generic structures with explicit, observable resizing behavior:
//!
//! | Structure | Backing | Use cases |
//! |-----------|---------|-----------|
//! | [`Vector`] | owned grow/decay buffer | dynamic arrays, index-heavy access |
//! | [`Heap`] | [`Vector`] | priority queues, min/max scheduling |
//! | [`List`] | singly linked nodes | ordered sequences, O(1) tail append |
//! | [`Stack`] | [`List`] | LIFO work |
//! | [`Queue`] | [`List`] | FIFO work |
//!
//! The vector doubles capacity when a push finds it full and shrinks to a
//! quarter once a removal leaves occupancy at or below a quarter, so
//! resize cost stays amortized O(1) and a push/pop cycle sitting on a
//! capacity boundary cannot thrash the allocator. The heap fixes its
//! min/max mode at construction and performs every operation as index
//! arithmetic over the vector it owns.
//!
//! # Quick Start
//!
//! ```
//! use strux::{Heap, HeapKind, List, Vector};
//!
//! // Collect a sequence, then hand it to a heap in bulk (O(n) heapify).
//! let mut list: List<u64> = List::new();
//! list.push(5);
//! list.push(3);
//! list.push(8);
//!
//! let vector: Vector<u64> = list.to_vector();
//! assert_eq!(vector.capacity(), 3);
//!
//! let mut heap = Heap::from_vector(vector, HeapKind::Min);
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! ```
//!
//! # Errors
//!
//! Contract violations return typed errors instead of panicking:
//! [`CapacityError`] for zero-capacity construction, [`IndexError`] for
//! out-of-bounds access, [`EmptyError`] for removal or peek on an empty
//! container. Failed lookups are `Option`/`bool`, never errors.
//!
//! All structures are single-threaded: no locking, no interior
//! mutability. `Send`/`Sync` follow element capabilities.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod list;
pub mod queue;
pub mod stack;
pub mod vector;

pub use error::{CapacityError, EmptyError, IndexError};
pub use heap::{Heap, HeapKind};
pub use list::List;
pub use queue::Queue;
pub use stack::Stack;
pub use vector::Vector;
