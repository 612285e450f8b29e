//! Built-in catalog.
//!
//! Registers every language section shipped with the binary. Adding a
//! language means adding a section here plus its markdown files under
//! `content/`; no router or renderer changes are required.

use crate::library::ContentLibrary;

/// Assemble the catalog compiled into the binary.
pub(crate) fn builtin() -> ContentLibrary {
    ContentLibrary::builder()
        .language("c")
        .group("Basics")
        .topic("Hello World", include_str!("../content/c/hello-world.md"))
        .topic("Data Types", include_str!("../content/c/data-types.md"))
        .topic("Looping", include_str!("../content/c/looping.md"))
        .topic("Arrays", include_str!("../content/c/arrays.md"))
        .topic("Structures", include_str!("../content/c/structures.md"))
        .topic("Functions", include_str!("../content/c/functions.md"))
        .topic("Pointers", include_str!("../content/c/pointers.md"))
        .topic(
            "Bit Manipulation",
            include_str!("../content/c/bit-manipulation.md"),
        )
        .group("Data Structures")
        .topic("Linked Lists", include_str!("../content/c/linked-lists.md"))
        .topic("Stacks", include_str!("../content/c/stacks.md"))
        .topic("Queues", include_str!("../content/c/queues.md"))
        .topic("Hash Tables", include_str!("../content/c/hash-tables.md"))
        .topic("Sets", include_str!("../content/c/sets.md"))
        .topic("Trees", include_str!("../content/c/trees.md"))
        .topic("Heaps", include_str!("../content/c/heaps.md"))
        .topic("Graphs", include_str!("../content/c/graphs.md"))
        .group("Algorithms")
        .topic("Sorting", include_str!("../content/c/sorting.md"))
        .topic("Searching", include_str!("../content/c/searching.md"))
        .topic("Recursion", include_str!("../content/c/recursion.md"))
        .topic("DFS/BFS", include_str!("../content/c/dfs-bfs.md"))
        .build()
}
