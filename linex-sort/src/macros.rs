// Linex - linex-sort
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Open a span covering one sort call for the rest of the block.
macro_rules! sort_span {
    ($algorithm:expr, $len:expr) => {
        #[cfg(feature = "tracing")]
        let _sort_guard =
            ::tracing::debug_span!("sort", algorithm = $algorithm, len = $len).entered();
    };
}
