pub mod variant;

pub use variant::{
    truncate_chars, FaqEntry, SeoVariant, MAX_DESCRIPTION_LEN, MAX_SEO_DESCRIPTION_LEN,
    MAX_SEO_TITLE_LEN, MAX_TITLE_LEN, VARIANT_SLOTS,
};
