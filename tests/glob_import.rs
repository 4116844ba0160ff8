//! Everything the crate exports, pulled in with one glob.

use zendatatypes::*;

#[test]
fn descriptor_methods_resolve_under_glob_import() {
    assert_eq!(Int64Type.kind(), NumericKind::Int64);
    assert_eq!(Int64Type.short_name(), "64-bit int");
    assert_eq!(Int64Type.long_name(), "64-bit signed integer");
    assert_eq!(Int64Type.description(), NumericKind::Int64.description());
    assert!(Int64Type.is_signed());
    assert_eq!(Int64Type.bit_count(), 64);

    let erased = descriptor(NumericKind::Int64);
    assert_eq!(erased.numeric_kind(), NumericKind::Int64);
    assert_eq!(erased.numeric_kind().short_name(), Int64Type.short_name());
    assert_eq!(erased.create_sample(), Sample::Int64(0));
}

#[test]
fn generic_code_sees_both_traits() {
    fn names<T: DataType + ErasedDataType>(t: &T) -> (&'static str, NumericKind) {
        (t.long_name(), t.numeric_kind())
    }
    assert_eq!(
        names(&Float32Type),
        ("32-bit signed float", NumericKind::Float32)
    );
}
