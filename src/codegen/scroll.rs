// src/codegen/scroll.rs
// Scroll gesture snippets

use super::{Direction, Language, Point, ScrollRequest};
use crate::error::{GestureError, Result};

/// Start and end of a scroll stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub start: Point,
    pub end: Point,
}

/// Derive a stroke from a direction and distance.
///
/// The anchor points are placeholders that read well in a snippet; they are
/// not measured from any device and callers are expected to adapt them.
pub fn stroke_for(direction: Direction, distance: f64) -> Stroke {
    let (start, end) = match direction {
        Direction::Up => (Point::new(200.0, 200.0), Point::new(200.0, 200.0 + distance)),
        Direction::Down => (Point::new(200.0, 500.0), Point::new(200.0, 500.0 - distance)),
        Direction::Left => (Point::new(300.0, 300.0), Point::new(300.0 + distance, 300.0)),
        Direction::Right => (Point::new(500.0, 300.0), Point::new(500.0 - distance, 300.0)),
    };
    Stroke { start, end }
}

pub fn generate(req: &ScrollRequest) -> Result<String> {
    let element_id = match (req.use_element, req.element_id.as_deref()) {
        (true, Some(id)) if !id.is_empty() => Some(id),
        (true, _) => return Err(GestureError::MissingRequiredField("elementId")),
        (false, _) => None,
    };
    let stroke = stroke_for(req.direction, req.distance);

    let code = match (req.language, element_id) {
        (Language::Javascript, Some(id)) => javascript_into_view(id),
        (Language::Javascript, None) => javascript_swipe(req.direction, stroke),
        (Language::Java, Some(id)) if req.direction == Direction::Down => java_ui_scrollable(id),
        (Language::Java, _) => java_actions(stroke),
    };
    Ok(code)
}

fn javascript_into_view(id: &str) -> String {
    format!(
        r#"// For WebdriverIO v9+ and below
await $('~{id}').scrollIntoView();"#
    )
}

fn javascript_swipe(direction: Direction, stroke: Stroke) -> String {
    let direction = direction.as_str();
    let Stroke { start, end } = stroke;
    let ((sx, sy), (ex, ey)) = (start.js(), end.js());
    format!(
        r#"// For WebdriverIO v9+
await browser.swipe({{
  direction: '{direction}',
  duration: 1500,
  percent: 0.8
}});

// For WebdriverIO below v9
// Option 1: Using touchAction
await driver.touchAction([
  {{ action: 'press', x: {sx}, y: {sy} }},
  {{ action: 'wait', ms: 500 }},
  {{ action: 'moveTo', x: {ex}, y: {ey} }},
  {{ action: 'release' }}
]);

// Option 2: Using Gestures helper class
class Gestures {{
  static async checkIfDisplayedWithSwipe({{
    scrollContainer,
    searchableElement,
    maxScrolls = 5,
    direction = '{direction}'
  }}) {{
    // Get container dimensions
    const {{ x, y, width, height }} = await driver.getElementRect(scrollContainer.elementId);
    
    // Calculate scroll coordinates based on direction
    const from = {{ x: 0, y: 0 }};
    const to = {{ x: 0, y: 0 }};
    
    switch(direction) {{
      case 'up':
        from.x = x + width / 2;
        from.y = y + height * 0.8;
        to.x = x + width / 2;
        to.y = y + height * 0.2;
        break;
      case 'down':
        from.x = x + width / 2;
        from.y = y + height * 0.2;
        to.x = x + width / 2;
        to.y = y + height * 0.8;
        break;
      case 'left':
        from.x = x + width * 0.8;
        from.y = y + height / 2;
        to.x = x + width * 0.2;
        to.y = y + height / 2;
        break;
      case 'right':
        from.x = x + width * 0.2;
        from.y = y + height / 2;
        to.x = x + width * 0.8;
        to.y = y + height / 2;
        break;
    }}
    
    // Execute gesture
    await driver
      .action('pointer')
      .move(from.x, from.y)
      .down()
      .pause(100)
      .move({{ duration: 1000, x: to.x, y: to.y }})
      .up()
      .perform();
  }}
}}

// Example usage
const scrollContainer = $('~scrollView');
await Gestures.checkIfDisplayedWithSwipe({{
  scrollContainer,
  searchableElement: $('~targetElement'),
  direction: '{direction}'
}});"#
    )
}

fn java_ui_scrollable(id: &str) -> String {
    format!(
        r#"// Using Android UIAutomator
driver.findElement(AppiumBy.androidUIAutomator(
  "new UiScrollable(new UiSelector().scrollable(true)).scrollIntoView("
  + "new UiSelector().text(\"{id}\"))"));"#
    )
}

fn java_actions(stroke: Stroke) -> String {
    let Stroke { start, end } = stroke;
    let ((sx, sy), (ex, ey)) = (start.js(), end.js());
    format!(
        r#"// Using W3C Actions API (recommended)
WebElement scrollView = driver.findElement(AppiumBy.accessibilityId("scrollView"));
Point source = scrollView.getLocation();
Dimension size = scrollView.getSize();

// Create a finger gesture with touch pointer
PointerInput finger = new PointerInput(PointerInput.Kind.TOUCH, "finger");
Sequence sequence = new Sequence(finger, 1);

// Calculate scroll coordinates based on direction
int fromX = {sx};
int fromY = {sy};
int toX = {ex};
int toY = {ey};

// Press, move and release
sequence.addAction(finger.createPointerMove(Duration.ofMillis(0),
        PointerInput.Origin.viewport(), fromX, fromY));
sequence.addAction(finger.createPointerDown(PointerInput.MouseButton.MIDDLE.asArg()));
sequence.addAction(finger.createPointerMove(Duration.ofMillis(600),
        PointerInput.Origin.viewport(), toX, toY));
sequence.addAction(finger.createPointerUp(PointerInput.MouseButton.MIDDLE.asArg()));

// Perform the action
driver.perform(Collections.singletonList(sequence));"#
    )
}
