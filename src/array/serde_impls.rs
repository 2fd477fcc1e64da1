/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Arrays serialize as (nested) fixed-length sequences, the same way as
// the plain arrays they wrap.  Deserialization rejects any other length.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::ser::SerializeTuple;
use serde::de::{self, SeqAccess, Visitor, IgnoredAny};

use crate::NumArray;

impl<E: Serialize, const M: usize> Serialize for NumArray<E, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(M)?;
        for x in &self.0 {
            tup.serialize_element(x)?;
        }
        tup.end()
    }
}

impl<'de, E: Deserialize<'de>, const M: usize> Deserialize<'de> for NumArray<E, M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(M, ArrayVisitor(PhantomData))
    }
}

struct ArrayVisitor<E, const M: usize>(PhantomData<E>);

impl<'de, E: Deserialize<'de>, const M: usize> Visitor<'de> for ArrayVisitor<E, M> {
    type Value = NumArray<E, M>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of exactly {} elements", M)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut elems = Vec::with_capacity(M);
        for i in 0..M {
            match seq.next_element()? {
                Some(x) => elems.push(x),
                None => return Err(de::Error::invalid_length(i, &self)),
            }
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(M + 1, &self));
        }

        match <[E; M]>::try_from(elems) {
            Ok(arr) => Ok(NumArray(arr)),
            Err(elems) => Err(de::Error::invalid_length(elems.len(), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{NumArray, Matrix, Vec3};

    #[test]
    fn json_layout() {
        let m = Matrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
        let s = serde_json::to_string(&m).unwrap();
        assert_eq!(s, "[[1,2,3],[4,5,6]]");
        assert_eq!(serde_json::from_str::<Matrix<i32, 2, 3>>(&s).unwrap(), m);
    }

    #[test]
    fn wrong_length() {
        assert!(serde_json::from_str::<Vec3<f64>>("[1.0, 2.0]").is_err());
        assert!(serde_json::from_str::<Vec3<f64>>("[1.0, 2.0, 3.0, 4.0]").is_err());
        assert_eq!(
            serde_json::from_str::<Vec3<f64>>("[1.0, 2.0, 3.0]").unwrap(),
            NumArray([1.0, 2.0, 3.0]),
        );
    }
}
