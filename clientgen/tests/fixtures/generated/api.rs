// Generated by clientgen. Do not edit.

pub mod my_client {
    use clientgen::runtime::{HttpClient, Route};
    use clientgen::{Document, Format, Method, Result};

    const VERSION: Option<&str> = Some("v1");
    const FORMAT: Format = Format::Xml;

    pub struct Api<H: HttpClient> {
        base_url: String,
        http: H,
    }

    impl<H: HttpClient> Api<H> {
        pub fn new(base_url: impl Into<String>, http: H) -> Self {
            Self {
                base_url: base_url.into(),
                http,
            }
        }

        pub fn kirk(&self, params: &[(&str, &str)]) -> Result<Document> {
            const ROUTE: Route<'static> = Route {
                name: "kirk",
                method: Method::Get,
                path: "kirk",
                params: &["foo", "juicy"],
            };
            self.call(&ROUTE, params)
        }

        pub fn shaggy(&self, params: &[(&str, &str)]) -> Result<Document> {
            const ROUTE: Route<'static> = Route {
                name: "shaggy",
                method: Method::Post,
                path: "shaggy",
                params: &["foo", "juicy"],
            };
            self.call(&ROUTE, params)
        }

        pub fn user(&self, params: &[(&str, &str)]) -> Result<Document> {
            const ROUTE: Route<'static> = Route {
                name: "user",
                method: Method::Get,
                path: "/users/{id}",
                params: &[],
            };
            self.call(&ROUTE, params)
        }

        fn call(&self, route: &Route, params: &[(&str, &str)]) -> Result<Document> {
            let request = route.request(&self.base_url, VERSION, FORMAT, params)?;
            let response = request.send(&self.http)?;
            super::super::xml_response_parser::my_client::parse(&response.body)
        }
    }
}
