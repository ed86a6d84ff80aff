use super::*;

#[test]
fn test_notice_area() {
    let area = notice_area(Rect::new(0, 0, 100, 50), 30);
    assert_eq!(area, Rect::new(70, 0, 30, 50));
}

#[test]
fn test_centered_area() {
    assert_eq!(
        centered_area(Rect::new(0, 0, 80, 24), 40, 10),
        Rect::new(20, 7, 40, 10)
    );
    assert_eq!(
        centered_area(Rect::new(2, 2, 20, 5), 40, 10),
        Rect::new(2, 2, 20, 5)
    );
}

#[test]
fn test_fill() {
    assert_eq!(fill(5, 2), "   ");
    assert_eq!(fill(2, 5), "");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("delectus aut autem", 10), "delectus …");
    assert_eq!(truncate("abc", 0), "…");
}
