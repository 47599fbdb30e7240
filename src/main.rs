//! merge-sources: merge a tree of Swift sources into a single file
//!
//! Every `.swift` file under the source directory is written, in sorted
//! path order, into one output file behind a `// MARK: - <path>` marker.

use anyhow::Result;

fn main() -> Result<()> {
    merge_sources::cli::run()
}
