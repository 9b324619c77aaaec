use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
}

/// Menu entries; the company register is for labor office staff only.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        href: "/",
        icon: "dashboard",
        title: "Beranda",
    }];
    if is_admin {
        items.push(NavItem {
            href: "/perusahaan",
            icon: "companies",
            title: "Perusahaan",
        });
    }
    items.push(NavItem {
        href: "/karyawan",
        icon: "employees",
        title: "Karyawan",
    });
    items.push(NavItem {
        href: "/persetujuan",
        icon: "approvals",
        title: "Persetujuan",
    });
    items
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {move || {
                    nav_items(auth.with(|a| a.is_admin()))
                        .into_iter()
                        .map(|item| view! {
                            <li>
                                <A href=item.href>
                                    {icon(item.icon)}
                                    <span>{item.title}</span>
                                </A>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_register_is_admin_only() {
        let admin: Vec<_> = nav_items(true).iter().map(|i| i.href).collect();
        assert_eq!(admin, vec!["/", "/perusahaan", "/karyawan", "/persetujuan"]);

        let operator: Vec<_> = nav_items(false).iter().map(|i| i.href).collect();
        assert!(!operator.contains(&"/perusahaan"));
        assert_eq!(operator.len(), 3);
    }
}
