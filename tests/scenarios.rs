//! End-to-end conversions of small mesh descriptions.

use objweld::{attribute::AttributeKind, convert_str, convert_to_string, Error};

#[test]
fn single_triangle() {
    let out = convert_to_string("v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n").unwrap();
    assert_eq!(
        out,
        "vertices 3\n\
         0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0 0\n\
         1.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0 0\n\
         1.000000 1.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0 0\n\
         indices 3\n\
         0 1 2\n"
    );
}

#[test]
fn repeated_corner_is_welded() {
    let out = convert_to_string("vt 0 0\nvt 1 0\nv 0 0 0\nv 1 0 0\nf 1/1 2/2 1/1\n").unwrap();
    assert_eq!(
        out,
        "vertices 2\n\
         0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 0.000000 1 0\n\
         1.000000 0.000000 0.000000 1.000000 0.000000 0.000000 0.000000 0.000000 1 0\n\
         indices 3\n\
         0 1 0\n"
    );
}

#[test]
fn bare_position_corner_uses_sentinels() {
    let mesh = convert_str::<u32>("v 1 2 3\nv 4 5 6\nv 7 8 9\nv 1 1 1\nv -1 -2 -3\nf 5\n").unwrap();
    let v = &mesh.vertices()[0];
    assert_eq!(v.position, nalgebra::point![-1.0, -2.0, -3.0]);
    assert!(!v.has_texcoord);
    assert!(!v.has_normal);
    assert_eq!(v.texcoord, nalgebra::point![0.0, 0.0]);
    assert_eq!(v.normal, nalgebra::vector![0.0, 0.0, 0.0]);
    assert!(v.to_string().ends_with(" 0 0"));
}

#[test]
fn full_corners_and_polygons() {
    let text = "\
# a textured quad with one normal
v  -1 -1 0
v   1 -1 0
v   1  1 0
v  -1  1 0
vt  0 0
vt  1 0
vt  1 1
vt  0 1
vn  0 0 1
usemtl plastic
f 1/1/1 2/2/1 3/3/1 4/4/1
f 1/1/1 3/3/1 4/4/1
";
    let mesh = convert_str::<u32>(text).unwrap();
    assert_eq!(mesh.vertices().len(), 4);
    assert_eq!(mesh.indices(), &[0, 1, 2, 3, 0, 2, 3]);
    for v in mesh.vertices() {
        assert!(v.has_texcoord && v.has_normal);
        assert_eq!(v.normal(), Some(&nalgebra::vector![0.0, 0.0, 1.0]));
    }
    let corners: Vec<_> = mesh.corners().map(|v| v.texcoord).collect();
    assert_eq!(corners[2], nalgebra::point![1.0, 1.0]);
}

#[test]
fn trailing_slash_forms_are_distinct_vertices() {
    let mesh = convert_str::<u32>("v 0 0 0\nvn 0 1 0\nf 1 1/ 1// 1//1 1\n").unwrap();
    assert_eq!(mesh.indices(), &[0, 1, 2, 3, 0]);
    assert_eq!(mesh.vertices()[0], mesh.vertices()[1]);
    assert_eq!(mesh.vertices()[1], mesh.vertices()[2]);
    assert!(mesh.vertices()[3].has_normal);
}

#[test]
fn no_faces_no_output_vertices() {
    let out = convert_to_string("v 0 0 0\nvt 0 0\nvn 0 0 1\n").unwrap();
    assert_eq!(out, "vertices 0\nindices 0\n\n");
}

#[test]
fn out_of_range_position_fails() {
    let err = convert_str::<u32>("vt 0 0\nv 0 0 0\nv 1 0 0\nf 9/1\n").unwrap_err();
    match err {
        Error::IndexOutOfRange {
            line,
            token,
            attribute,
            index,
            len,
        } => {
            assert_eq!(line, 4);
            assert_eq!(token, "9/1");
            assert_eq!(attribute, AttributeKind::Position);
            assert_eq!(index, 9);
            assert_eq!(len, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn out_of_range_optional_attributes_fail() {
    let err = convert_str::<u32>("v 0 0 0\nf 1/1\n").unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange {
            attribute: AttributeKind::Texcoord,
            len: 0,
            ..
        }
    ));
    let err = convert_str::<u32>("v 0 0 0\nvn 0 0 1\nf 1//2\n").unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange {
            attribute: AttributeKind::Normal,
            index: 2,
            len: 1,
            ..
        }
    ));
}

#[test]
fn oversized_index_is_out_of_range() {
    let err = convert_str::<u32>("v 0 0 0\nf 99999999999999999999\n").unwrap_err();
    match err {
        Error::IndexOutOfRange {
            line,
            attribute,
            index,
            len,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(attribute, AttributeKind::Position);
            assert_eq!(index, i64::MAX);
            assert_eq!(len, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_values_are_written_lowercase() {
    let out = convert_to_string("v nan inf -inf\nf 1\n").unwrap();
    assert_eq!(
        out.lines().nth(1),
        Some("nan inf -inf 0.000000 0.000000 0.000000 0.000000 0.000000 0 0")
    );
}

#[test]
fn malformed_corner_fails() {
    let err = convert_str::<u32>("v 0 0 0\nf 1 /1 1\n").unwrap_err();
    match err {
        Error::MalformedCorner { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "/1");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_number_fails() {
    let err = convert_str::<u32>("v 0 0 0\nvt 0 x\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            line: 2,
            directive: "vt",
            ..
        }
    ));
    assert!(err.to_string().contains("\"x\""));
}

#[test]
fn errors_name_the_line() {
    let err = convert_str::<u32>("v 0 0 0\n\n\nf 2\n").unwrap_err();
    assert_eq!(err.line(), Some(4));
    assert!(err.to_string().starts_with("line 4:"));
}
