mod codec_registry;
mod docx_codec;
mod srt_codec;

pub use codec_registry::CodecRegistry;
pub use docx_codec::DocxCodec;
pub use srt_codec::{parse_cues, SrtCodec, SubtitleCue, Timecode};
