pub const BANNER: &str = "Dice API is running. Use /test for API testing page.";

pub const TEST_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><meta charset="utf-8"/><title>Dice API Test</title></head>
<body>
  <h1>Dice API Test</h1>
  <button id="btn">Roll 2d6</button>
  <pre id="out"></pre>
  <script>
    document.getElementById('btn').addEventListener('click', async () => {
      const url = '/roll?count=2&sides=6';
      try {
        const r = await fetch(url);
        const data = await r.json();
        document.getElementById('out').textContent = JSON.stringify(data, null, 2);
      } catch (e) {
        document.getElementById('out').textContent = 'Error: ' + e.message;
      }
    });
  </script>
</body>
</html>"#;
