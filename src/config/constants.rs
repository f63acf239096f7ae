pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_WRITER_MODEL: &str = "meta-llama/llama-3.3-70b-instruct:free";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_CEREBRAS_BASE_URL: &str = "https://api.cerebras.ai/v1";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub const DEFAULT_SECTIONS: u32 = 4;

pub const POINTS_MAX_WORDS: u32 = 150;
pub const POINTS_TEMPERATURE: f32 = 0.75;
pub const PROSE_MAX_WORDS: u32 = 300;
pub const PROSE_TEMPERATURE: f32 = 0.3;
