//! Build outputs derived from content.
//!
//! | Generator   | Output                                   |
//! |-------------|------------------------------------------|
//! | [`data`]    | `<output>/<data>/*.json`                 |
//! | [`page`]    | `<output>/<posts.path>/<slug>/index.html`|
//! | [`sitemap`] | `<output>/sitemap.xml`                   |

pub mod data;
pub mod page;
pub mod sitemap;
