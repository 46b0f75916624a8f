use std::io::{BufRead, BufReader, Read};

use encoding_rs_io::DecodeReaderBytesBuilder;
use flate2::read::MultiGzDecoder;

use crate::config::{Compression, ReaderConfig};

/// Strips the compression wrapper and transcodes to UTF-8 before decoding.
/// Bytes pass through untouched when neither option is set.
pub fn wrap<'a, R>(input: R, cfg: &ReaderConfig) -> Box<dyn BufRead + 'a>
where
    R: Read + 'a,
{
    let decompressed: Box<dyn Read + 'a> = match cfg.compression {
        Compression::Gzip => Box::new(MultiGzDecoder::new(input)),
        Compression::None => Box::new(input),
    };

    match cfg.encoding {
        Some(encoding) => {
            let decoder = DecodeReaderBytesBuilder::new()
                .encoding(Some(encoding))
                .build(decompressed);
            Box::new(BufReader::new(decoder))
        }
        None => Box::new(BufReader::new(decompressed)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use flate2::write::GzEncoder;
    use flate2::Compression as GzLevel;

    use super::*;
    use crate::config::ReaderOptions;

    fn config(options: ReaderOptions) -> ReaderConfig {
        ReaderOptions {
            format: Some("csv".to_string()),
            columns: Some("a".to_string()),
            time_value: Some("0".to_string()),
            ..options
        }
        .build()
        .unwrap()
    }

    fn read_all(input: Box<dyn BufRead + '_>) -> String {
        let mut out = String::new();
        let mut input = input;
        input.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_passthrough() {
        let cfg = config(ReaderOptions::default());
        let wrapped = wrap(Cursor::new(b"a,b,c\n".to_vec()), &cfg);
        assert_eq!(read_all(wrapped), "a,b,c\n");
    }

    #[test]
    fn test_gzip_stripped() {
        let mut encoder = GzEncoder::new(Vec::new(), GzLevel::default());
        encoder.write_all(b"a,b,c\n1,2,3\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let cfg = config(ReaderOptions {
            compress: Some("gzip".to_string()),
            ..Default::default()
        });
        let wrapped = wrap(Cursor::new(compressed), &cfg);
        assert_eq!(read_all(wrapped), "a,b,c\n1,2,3\n");
    }

    #[test]
    fn test_transcoding() {
        // "café" in ISO-8859-1
        let latin1 = vec![b'c', b'a', b'f', 0xe9, b'\n'];

        let cfg = config(ReaderOptions {
            encoding: Some("latin1".to_string()),
            ..Default::default()
        });
        let wrapped = wrap(Cursor::new(latin1), &cfg);
        assert_eq!(read_all(wrapped), "café\n");
    }

    #[test]
    fn test_gzip_then_transcode() {
        let mut encoder = GzEncoder::new(Vec::new(), GzLevel::default());
        encoder.write_all(&[b'n', 0xf8, b'\n']).unwrap();
        let compressed = encoder.finish().unwrap();

        let cfg = config(ReaderOptions {
            compress: Some("gz".to_string()),
            encoding: Some("latin1".to_string()),
            ..Default::default()
        });
        let wrapped = wrap(Cursor::new(compressed), &cfg);
        assert_eq!(read_all(wrapped), "nø\n");
    }
}
