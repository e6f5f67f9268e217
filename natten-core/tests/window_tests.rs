use natten_core::{window_end, window_start, AxisParams, Window};

fn lengths() -> impl Iterator<Item = (usize, usize, usize)> {
    (1..24).flat_map(|length| {
        (1..10).flat_map(move |kernel_size| (1..5).map(move |dilation| (length, kernel_size, dilation)))
    })
}

#[test]
fn non_causal_window_length() {
    for (length, kernel_size, dilation) in lengths() {
        let axis = AxisParams::new(kernel_size).with_dilation(dilation);
        for index in 0..length {
            let w = Window::new(index, length, &axis);
            let residue = index % dilation;
            let lattice_len = (length - residue).div_ceil(dilation);
            assert_eq!(
                w.len(),
                kernel_size.min(lattice_len),
                "length {length} kernel {kernel_size} dilation {dilation} index {index}"
            );
            if dilation == 1 && length >= kernel_size {
                assert_eq!(w.len(), kernel_size);
            }
            if dilation == 1 && length < kernel_size {
                assert_eq!(w.len(), length);
            }
        }
    }
}

#[test]
fn non_causal_window_stays_in_bounds() {
    for (length, kernel_size, dilation) in lengths() {
        let axis = AxisParams::new(kernel_size).with_dilation(dilation);
        for index in 0..length {
            let w = Window::new(index, length, &axis);
            let coords: Vec<_> = w.iter().collect();
            assert!(coords.iter().all(|&c| c < length));
            assert!(coords.iter().all(|&c| c % dilation == index % dilation));
            assert!(coords.contains(&index), "{index} not in {coords:?}");
            assert!(w.end <= length);
            assert_eq!(w.len(), coords.len());
            // The exclusive end lies in (last sample, last sample + dilation].
            let last = coords[coords.len() - 1];
            assert!(w.end > last && w.end <= last + dilation);
        }
    }
}

#[test]
fn interior_windows_are_centered() {
    let axis = AxisParams::new(5).with_dilation(2);
    let length = 30;
    for index in 4..length - 4 {
        let w = Window::new(index, length, &axis);
        assert_eq!(w.start, index - 4);
        assert_eq!(w.iter().last(), Some(index + 4));
    }
}

#[test]
fn causal_window_grows_then_slides() {
    for (length, kernel_size, dilation) in lengths() {
        let axis = AxisParams::new(kernel_size)
            .with_dilation(dilation)
            .causal(true);
        let mut prev_len = 0;
        for index in 0..length {
            let w = Window::new(index, length, &axis);
            let coords: Vec<_> = w.iter().collect();
            assert_eq!(coords.last(), Some(&index));
            assert!(coords.iter().all(|&c| c <= index));
            let expected = (index / dilation + 1).min(kernel_size);
            assert_eq!(w.len(), expected);
            assert!(w.len() >= prev_len);
            prev_len = w.len();
            if index < dilation {
                assert_eq!(w.len(), 1);
            }
        }
    }
}

#[test]
fn raw_geometry_functions() {
    // width 5, kernel 3: the boundary positions get a full window.
    let start = window_start(0, 5, 3, 1, 1, false);
    assert_eq!((start, window_end(0, start, 5, 3, 1, false)), (0, 3));
    let start = window_start(4, 5, 3, 1, 1, false);
    assert_eq!((start, window_end(4, start, 5, 3, 1, false)), (2, 5));
    // causal, same axis.
    let start = window_start(0, 5, 3, 1, 1, true);
    assert_eq!((start, window_end(0, start, 5, 3, 1, true)), (0, 1));
    let start = window_start(3, 5, 3, 1, 1, true);
    assert_eq!((start, window_end(3, start, 5, 3, 1, true)), (1, 4));
    // degenerate axes never produce negative lengths.
    let start = window_start(0, 0, 3, 1, 2, false);
    assert!(window_end(0, start, 0, 3, 2, false) >= start);
    let start = window_start(1, 2, 5, 2, 1, true);
    assert_eq!((start, window_end(1, start, 2, 5, 1, true)), (0, 2));
}

#[test]
fn scenarios() {
    // width 5, kernel 3, non causal: every position sums exactly 3 terms.
    let axis = AxisParams::new(3);
    let lens: Vec<_> = (0..5).map(|i| Window::new(i, 5, &axis).len()).collect();
    assert_eq!(lens, [3, 3, 3, 3, 3]);
    // Same axis, causal.
    let axis = axis.causal(true);
    let lens: Vec<_> = (0..5).map(|i| Window::new(i, 5, &axis).len()).collect();
    assert_eq!(lens, [1, 2, 3, 3, 3]);
    // width 9, kernel 3, dilation 2: samples spaced by 2, never off-axis.
    let axis = AxisParams::new(3).with_dilation(2);
    for index in 0..9 {
        let coords: Vec<_> = Window::new(index, 9, &axis).iter().collect();
        assert_eq!(coords.len(), 3);
        assert!(coords.windows(2).all(|c| c[1] - c[0] == 2));
        assert!(coords.iter().all(|&c| c < 9));
    }
}
