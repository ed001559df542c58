//! Tolerant text extractors
//!
//! Pure functions that pull structured values out of raw robots.txt and
//! HTML text. They scan with regular expressions instead of building a
//! DOM, so minified or malformed markup still yields what it can.

mod markup;
mod meta;
mod robots;
mod structured_data;

pub use markup::{count_h1_tags, has_html_lang, ImageAltSummary};
pub use meta::{extract_meta_tags, MetaTagSet};
pub use robots::{parse_robots_txt, root_allowed_for, RobotsRule, RobotsRules};
pub use structured_data::{extract_structured_data, is_organization_type, schema_types};
