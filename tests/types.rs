use objweld::{Conversion, WeldedMesh};

/// Ensure that conversions can compile with any primitive integer index type with width <= `size_of::`<usize>
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn welded_index() {
    let _8 = Conversion::<u8>::new();
    let _16 = Conversion::<u16>::new();
    let _i32 = Conversion::<i32>::new();
    #[cfg(not(target_pointer_width = "16"))]
    {
        // size_of::<usize>() > 16
        let _32 = WeldedMesh::<u32>::default();
        #[cfg(not(target_pointer_width = "32"))]
        {
            // size_of::<usize>() > 32
            let _64 = WeldedMesh::<u64>::default();
        }
    }
    let _size = WeldedMesh::<usize>::default();
}

/// The same text converts identically whatever the index width, as long as the vertices fit
#[test]
fn index_width_does_not_change_output() {
    let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\nf 4 3 1\n";
    let narrow = objweld::convert_str::<u8>(text).unwrap().to_string();
    let wide = objweld::convert_str::<u64>(text).unwrap().to_string();
    assert_eq!(narrow, wide);
}
