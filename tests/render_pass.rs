use ducttick::{DuctKernel, KernelConfig, Vec2, VertexPath};
use ducttick_host::{AciColor, DuctDraft, RenderAdapter, RenderRegistry};

fn adapter() -> RenderAdapter<DuctKernel> {
    RenderAdapter::new(DuctKernel::new(KernelConfig::default()))
}

#[test]
fn straight_duct_ticks() {
    let mut reg = RenderRegistry::new();
    reg.enable(1);
    let path = VertexPath::open(vec![Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)]);
    let lines = adapter().render(&reg, 1, &path).unwrap();
    let cyan_path: Vec<_> = lines.iter().take_while(|l| l.color == AciColor::CYAN).collect();
    assert_eq!(cyan_path.len(), 1);
    let tick_lines = &lines[1..];
    assert_eq!(tick_lines.len(), 6 * 3);
    // blue stripe spans the width, centred on the path
    for chunk in tick_lines.chunks(3) {
        let blue = chunk[1];
        assert_eq!(blue.color, AciColor::CYAN);
        assert!((blue.start.y + 4.0).abs() < 1e-9 && (blue.end.y - 4.0).abs() < 1e-9);
        assert_eq!(chunk[0].color, AciColor::RED);
        assert_eq!(chunk[2].color, AciColor::RED);
    }
}

#[test]
fn width_change_shows_on_next_pass() {
    let mut reg = RenderRegistry::new();
    reg.enable(1);
    let path = VertexPath::open(vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 12.0)]);
    let a = adapter();
    let before = a.render(&reg, 1, &path).unwrap();
    reg.set_width(1, 16.0).unwrap();
    let after = a.render(&reg, 1, &path).unwrap();
    assert_eq!(before.len(), after.len());
    let blue = after[2];
    assert!((blue.start.distance(blue.end) - 16.0).abs() < 1e-9);
}

#[test]
fn corner_path_is_fitted() {
    let mut reg = RenderRegistry::new();
    reg.enable(9);
    let path = VertexPath::open(vec![Vec2::new(0.0, 0.0), Vec2::new(40.0, 0.0), Vec2::new(40.0, 40.0)]);
    let lines = adapter().render(&reg, 9, &path).unwrap();
    let path_lines = lines.iter().take_while(|l| l.color == AciColor::CYAN).count();
    // 2 end points + 17 arc points give 18 lines
    assert_eq!(path_lines, 18);
}

#[test]
fn draft_preview_is_yellow() {
    let mut d = DuctDraft::new(Vec2::ZERO, 6.0);
    d.move_cursor(Vec2::new(12.0, 0.0));
    let lines = adapter().preview(&d.preview_path(), d.width());
    assert_eq!(lines[0].color, AciColor::YELLOW);
    assert!(lines.iter().skip(1).all(|l| l.color != AciColor::YELLOW));
    assert_eq!(lines.len(), 1 + 4 * 3);
}
