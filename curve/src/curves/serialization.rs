use crate::{curves::affine::COMPRESSED_POINT_SIZE, Fq, Point};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};

// Compressed form is the 32-byte sign-and-y packing of `Point::compress`;
// uncompressed form is `x` followed by `y` in the field's own encoding.
impl CanonicalSerialize for Point {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        match compress {
            Compress::Yes => Ok(writer.write_all(&self.compress())?),
            Compress::No => {
                self.x.serialize_with_mode(&mut writer, compress)?;
                self.y.serialize_with_mode(&mut writer, compress)
            },
        }
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        match compress {
            Compress::Yes => COMPRESSED_POINT_SIZE,
            Compress::No => self.x.serialized_size(compress) + self.y.serialized_size(compress),
        }
    }
}

impl Valid for Point {
    fn check(&self) -> Result<(), SerializationError> {
        if self.is_on_curve() {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl CanonicalDeserialize for Point {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let point = match compress {
            Compress::Yes => {
                let mut buf = [0u8; COMPRESSED_POINT_SIZE];
                reader.read_exact(&mut buf)?;
                Point::decompress(&buf).map_err(|_| SerializationError::InvalidData)?
            },
            Compress::No => {
                let x = Fq::deserialize_with_mode(&mut reader, compress, validate)?;
                let y = Fq::deserialize_with_mode(&mut reader, compress, validate)?;
                Point::new(x, y)
            },
        };
        if let Validate::Yes = validate {
            point.check()?;
        }
        Ok(point)
    }
}
