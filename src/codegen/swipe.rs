// src/codegen/swipe.rs
// Swipe gesture snippets

use super::{Direction, JsNumber, Language, Point, SwipeRequest};
use crate::error::Result;

/// Cardinal label for a stroke. Only used to annotate the snippet.
///
/// A purely vertical stroke is `up` when it moves towards the top of the
/// screen, otherwise `down`; any horizontal movement wins over vertical.
pub fn direction_between(start: Point, end: Point) -> Direction {
    if start.x == end.x {
        if start.y > end.y {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if start.x > end.x {
        Direction::Left
    } else {
        Direction::Right
    }
}

pub fn generate(req: &SwipeRequest) -> Result<String> {
    let start = Point::new(req.start_x, req.start_y);
    let end = Point::new(req.end_x, req.end_y);

    let code = match req.language {
        Language::Javascript => {
            javascript(start, end, direction_between(start, end), req.duration)
        }
        Language::Java => java(start, end, req.duration),
    };
    Ok(code)
}

fn javascript(start: Point, end: Point, direction: Direction, duration: f64) -> String {
    let direction = direction.as_str();
    let duration = JsNumber(duration);
    let ((sx, sy), (ex, ey)) = (start.js(), end.js());
    format!(
        r#"// For WebdriverIO v9+
// Calculate direction based on coordinates
const direction = '{direction}';

await browser.swipe({{
  direction: '{direction}',
  duration: {duration}
}});

// For WebdriverIO below v9
// Option 1: Using touchAction
await driver.touchAction([
  {{ action: 'press', x: {sx}, y: {sy} }},
  {{ action: 'wait', ms: {duration} }},
  {{ action: 'moveTo', x: {ex}, y: {ey} }},
  {{ action: 'release' }}
]);

// Option 2: Using action API
await driver
  .action('pointer')
  .move({sx}, {sy})
  .down()
  .pause(100)
  .move({{ duration: {duration}, x: {ex}, y: {ey} }})
  .up()
  .perform();"#
    )
}

fn java(start: Point, end: Point, duration: f64) -> String {
    let duration = JsNumber(duration);
    let ((sx, sy), (ex, ey)) = (start.js(), end.js());
    format!(
        r#"// Using W3C Actions API (recommended)
PointerInput finger = new PointerInput(PointerInput.Kind.TOUCH, "finger");
Sequence sequence = new Sequence(finger, 1);

// Press, move and release
sequence.addAction(finger.createPointerMove(Duration.ofMillis(0),
        PointerInput.Origin.viewport(), {sx}, {sy}));
sequence.addAction(finger.createPointerDown(PointerInput.MouseButton.MIDDLE.asArg()));
sequence.addAction(finger.createPointerMove(Duration.ofMillis({duration}),
        PointerInput.Origin.viewport(), {ex}, {ey}));
sequence.addAction(finger.createPointerUp(PointerInput.MouseButton.MIDDLE.asArg()));

// Perform the action
driver.perform(Collections.singletonList(sequence));"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(language: Language, start: (f64, f64), end: (f64, f64)) -> SwipeRequest {
        SwipeRequest {
            language,
            start_x: start.0,
            start_y: start.1,
            end_x: end.0,
            end_y: end.1,
            duration: 500.0,
        }
    }

    #[test]
    fn vertical_strokes() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(direction_between(origin, Point::new(0.0, 100.0)), Direction::Down);
        assert_eq!(direction_between(Point::new(0.0, 100.0), origin), Direction::Up);
    }

    #[test]
    fn stationary_stroke_is_down() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(direction_between(p, p), Direction::Down);
    }

    #[test]
    fn horizontal_movement_wins() {
        assert_eq!(
            direction_between(Point::new(100.0, 0.0), Point::new(0.0, 0.0)),
            Direction::Left
        );
        assert_eq!(
            direction_between(Point::new(0.0, 500.0), Point::new(1.0, 0.0)),
            Direction::Right
        );
    }

    #[test]
    fn javascript_snippet_carries_direction() {
        let code = generate(&swipe(Language::Javascript, (100.0, 0.0), (0.0, 0.0))).unwrap();
        assert!(code.contains("const direction = 'left';"));
        assert!(code.contains("  direction: 'left',\n  duration: 500\n"));
        assert!(code.contains("{ action: 'press', x: 100, y: 0 }"));
        assert!(code.contains(".move({ duration: 500, x: 0, y: 0 })"));
    }

    #[test]
    fn java_snippet_has_no_direction() {
        let code = generate(&swipe(Language::Java, (0.0, 0.0), (0.0, 100.0))).unwrap();
        assert!(!code.contains("direction"));
        assert!(code.contains("Duration.ofMillis(500)"));
        assert!(code.contains("PointerInput.Origin.viewport(), 0, 100));"));
    }
}
