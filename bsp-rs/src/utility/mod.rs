pub(crate) mod null_string;
