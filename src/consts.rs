//! Static declarations shared across the tool: marketplace API URL
//! patterns, scraper file locations, and the header set used for image
//! downloads.

pub const STATE_FILE: &str = "xianyu_state.json";
pub const IMAGE_SAVE_DIR: &str = "images";
pub const CONFIG_FILE: &str = "config.json";

/// Prefix for per-task temporary image directories.
pub const TASK_IMAGE_DIR_PREFIX: &str = "task_images_";

// URL fragments identifying the marketplace search/detail API responses.
pub const API_URL_PATTERN: &str = "h5api.m.goofish.com/h5/mtop.taobao.idlemtopsearch.pc.search";
pub const DETAIL_API_URL_PATTERN: &str = "h5api.m.goofish.com/h5/mtop.taobao.idle.pc.detail";

/// Browser-like headers for fetching listing images.
pub const IMAGE_DOWNLOAD_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:139.0) Gecko/20100101 Firefox/139.0",
    ),
    (
        "Accept",
        "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8",
    ),
    ("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
];
